//! The four-phase autonomous TDD pipeline, shared by every aggregate artifact.

pub const TITLE: &str = "SAM Autonomous TDD Pipeline";

pub struct Step {
    /// Agent id performing the step
    pub agent: &'static str,
    pub action: &'static str,
}

pub struct Phase {
    pub title: &'static str,
    pub summary: &'static str,
    pub steps: &'static [Step],
}

pub const PHASES: [Phase; 4] = [
    Phase {
        title: "Validate requirements",
        summary: "Check the requirements for gaps, contradictions and missing acceptance criteria before any code is written.",
        steps: &[
            Step {
                agent: "atlas",
                action: "validates the requirements and proposes the architecture",
            },
            Step {
                agent: "iris",
                action: "reviews user-facing flows when the feature has a UI",
            },
        ],
    },
    Phase {
        title: "Generate stories",
        summary: "Break the validated requirements into small, ordered, independently testable stories.",
        steps: &[Step {
            agent: "sam",
            action: "writes the story list with acceptance criteria",
        }],
    },
    Phase {
        title: "Red / green / refactor (per story)",
        summary: "Repeat this loop for every story, in order. Never start the next story while a test is red.",
        steps: &[
            Step {
                agent: "titan",
                action: "RED: writes failing tests for the story",
            },
            Step {
                agent: "dyna",
                action: "GREEN: writes the minimal code that makes them pass",
            },
            Step {
                agent: "argus",
                action: "REFACTOR: reviews and cleans up while keeping tests green",
            },
        ],
    },
    Phase {
        title: "Finalize with documentation",
        summary: "Once every story is green, document what was built.",
        steps: &[Step {
            agent: "sage",
            action: "writes user and maintainer documentation",
        }],
    },
];

/// Render the phases as markdown, formatting each agent with `invoke`.
pub fn render(invoke: impl Fn(&str) -> String) -> String {
    let mut out = String::new();

    for (index, phase) in PHASES.iter().enumerate() {
        out.push_str(&format!("## Phase {}: {}\n\n", index + 1, phase.title));
        out.push_str(phase.summary);
        out.push_str("\n\n");
        for step in phase.steps {
            out.push_str(&format!("- `{}` {}\n", invoke(step.agent), step.action));
        }
        out.push('\n');
    }

    out
}

/// Agent ids in the order the pipeline invokes them
pub fn agents() -> impl Iterator<Item = &'static str> {
    PHASES
        .iter()
        .flat_map(|phase| phase.steps.iter().map(|step| step.agent))
}
