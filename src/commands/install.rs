use crate::agents::AgentRegistry;
use crate::cli::prompt;
use crate::config::Config;
use crate::error::Result;
use crate::installer::{InstallReport, Installer};
use crate::output::Palette;
use crate::templates::TemplateStore;
use crate::version;
use std::io;
use std::path::Path;

pub fn execute(target: &Path, config: &Config, palette: &Palette) -> Result<()> {
    print_banner(palette);

    // Fatal checks first: nothing is written until these pass
    let registry = AgentRegistry::load()?;
    let store = TemplateStore::locate(config.templates_path().as_deref())?;

    let selector = match config.selector()? {
        Some(selector) => selector,
        None => {
            let mut input = io::stdin().lock();
            let mut output = io::stdout();
            let selector = prompt::select_platform(&mut input, &mut output, palette)?;
            println!();
            selector
        }
    };

    let installer = Installer::new(&registry, &store, target);

    let existing = installer.existing_installs(selector)?;
    if !existing.is_empty() {
        println!(
            "{}",
            palette.warn("  Warning: SAM files already exist in this directory:")
        );
        for install in &existing {
            println!(
                "{}",
                palette.warn(&format!(
                    "    {} ({})",
                    install.path.display(),
                    files(install.files)
                ))
            );
        }
        println!("{}", palette.warn("  Existing files will be overwritten.\n"));
    }

    println!(
        "{}",
        palette.info(&format!(
            "  Installing SAM for {} to: {}\n",
            selector,
            installer.target().display()
        ))
    );

    let reports = installer.install(selector)?;
    print_summary(&reports, palette);

    Ok(())
}

fn print_banner(palette: &Palette) {
    println!();
    println!("  {}", palette.heading("SAM - Smart Agent Manager"));
    println!(
        "{}",
        palette.info(&format!("  Autonomous TDD Agent System ({})\n", version::banner()))
    );
}

fn print_summary(reports: &[InstallReport], palette: &Palette) {
    for report in reports {
        println!("  {}", palette.heading(report.platform.display_name()));
        for group in &report.groups {
            println!(
                "{}",
                palette.success(&format!("    ✓ {} ({})", group.group, files(group.files)))
            );
        }
    }

    println!("\n  {}\n", palette.heading("Installation complete!"));

    for report in reports {
        println!(
            "{}",
            palette.info(&format!(
                "  SAM agents available in {}:",
                report.platform.display_name()
            ))
        );
        let width = report
            .usage
            .iter()
            .map(|hint| hint.invocation.len())
            .max()
            .unwrap_or(0);
        for hint in &report.usage {
            println!("    {:<width$}  - {}", hint.invocation, hint.label, width = width);
        }
        println!();
    }

    for report in reports {
        println!("{}", palette.warn(&format!("  {}", report.restart_note)));
    }
    println!();
}

fn files(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", count)
    }
}
