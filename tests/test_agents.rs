use sam_agents::agents::{AgentRecord, AgentRegistry};
use sam_agents::error::SamError;
use sam_agents::templates::TemplateStore;

#[test]
fn test_agent_registry_loads() {
    let _registry = AgentRegistry::load().expect("Failed to load agent registry");
    // If we got here, the embedded catalog parsed and validated
}

#[test]
fn test_list_available_agents() {
    let registry = AgentRegistry::load().expect("Failed to load registry");
    let available = registry.list_available();

    assert_eq!(available.len(), 7);
    assert_eq!(available[0], "sam");
    assert!(available.contains(&"atlas".to_string()));
    assert!(available.contains(&"iris".to_string()));
}

#[test]
fn test_get_atlas_agent() {
    let registry = AgentRegistry::load().expect("Failed to load registry");
    let atlas = registry.get("atlas").expect("Atlas should be available");

    assert_eq!(atlas.name, "Atlas - System Architect");
    assert_eq!(atlas.source, "sam/agents/atlas.md");
    assert_eq!(atlas.mention(), "@atlas");
    assert_eq!(atlas.package_name(), "sam-atlas");
    assert!(atlas.description.is_some());
}

#[test]
fn test_get_nonexistent_agent() {
    let registry = AgentRegistry::load().expect("Failed to load registry");
    assert!(registry.get("nonexistent").is_none());
}

#[test]
fn test_every_bundled_agent_has_a_template() {
    let registry = AgentRegistry::load().expect("Failed to load registry");
    let store = TemplateStore::locate(None).expect("Bundled templates should exist");

    for agent in &registry {
        assert!(
            store.has_agent(agent),
            "missing template for agent '{}': {}",
            agent.id,
            store.agent_source(agent).display()
        );
    }
    assert!(store.workflow_doc().is_some());
}

#[test]
fn test_duplicate_ids_rejected() {
    let result = AgentRegistry::new(vec![
        AgentRecord::new("sage", "sam/agents/sage.md", "Sage"),
        AgentRecord::new("sage", "sam/agents/sage2.md", "Sage 2"),
    ]);
    assert!(matches!(result, Err(SamError::DuplicateAgent(id)) if id == "sage"));
}

#[test]
fn test_custom_registry_preserves_order() {
    let registry = AgentRegistry::new(vec![
        AgentRecord::new("zeta", "z.md", "Zeta"),
        AgentRecord::new("alpha", "a.md", "Alpha"),
    ])
    .unwrap();

    assert_eq!(registry.list_available(), vec!["zeta", "alpha"]);
    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
}
