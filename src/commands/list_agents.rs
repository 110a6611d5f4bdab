use crate::agents::AgentRegistry;
use crate::error::Result;
use crate::output::Palette;

pub fn execute(palette: &Palette) -> Result<()> {
    let registry = AgentRegistry::load()?;

    println!("{}", palette.heading("SAM agents:"));
    let width = registry.iter().map(|a| a.id.len()).max().unwrap_or(0);
    for agent in &registry {
        println!("  {:<width$}  {}", agent.id, agent.name, width = width);
        if let Some(description) = &agent.description {
            println!("  {:<width$}  {}", "", description, width = width);
        }
    }

    Ok(())
}
