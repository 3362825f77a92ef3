/// Unit tests for the tool catalog and the enablement set
use habitica_mcp::tools::{catalog, definition, ToolName};
use habitica_mcp::{Language, ToolSet};

#[test]
fn catalog_has_one_definition_per_tool_in_order() {
    let definitions = catalog(Language::English);
    assert_eq!(definitions.len(), ToolName::ALL.len());
    for (def, tool) in definitions.iter().zip(ToolName::ALL) {
        assert_eq!(def.name, tool.as_str());
    }
}

#[test]
fn tool_names_round_trip_through_the_wire_format() {
    for tool in ToolName::ALL {
        assert_eq!(tool.as_str().parse::<ToolName>().unwrap(), tool);
    }
    assert!("no_such_tool".parse::<ToolName>().is_err());
}

#[test]
fn schemas_declare_their_required_fields() {
    let def = definition(ToolName::ScoreTask, Language::English);
    assert_eq!(def.input_schema["type"], "object");
    assert_eq!(def.input_schema["required"][0], "taskId");

    let def = definition(ToolName::HatchPet, Language::English);
    let required: Vec<&str> = def.input_schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(required, vec!["egg", "hatchingPotion"]);
}

#[test]
fn parameterless_tools_have_empty_schemas() {
    for tool in [
        ToolName::GetUserProfile,
        ToolName::GetStats,
        ToolName::GetInventory,
        ToolName::GetTags,
        ToolName::GetPets,
        ToolName::GetMounts,
        ToolName::GetNotifications,
    ] {
        let def = definition(tool, Language::English);
        assert!(
            def.input_schema["properties"].as_object().unwrap().is_empty(),
            "{tool} should take no parameters"
        );
    }
}

#[test]
fn descriptions_are_translated() {
    for tool in ToolName::ALL {
        let en = definition(tool, Language::English).description;
        let zh = definition(tool, Language::Chinese).description;
        assert_ne!(en, zh, "description of {tool} should differ by language");
    }
}

#[test]
fn standard_set_enables_task_management_only() {
    let set = ToolSet::standard();
    assert!(set.enabled(ToolName::GetTasks));
    assert!(set.enabled(ToolName::CreateTag));
    assert!(set.enabled(ToolName::ScoreChecklistItem));
    assert!(!set.enabled(ToolName::GetUserProfile));
    assert!(!set.enabled(ToolName::BuyItem));
    assert!(!set.enabled(ToolName::CastSpell));

    let enabled = ToolName::ALL.iter().filter(|t| set.enabled(**t)).count();
    assert_eq!(enabled, 12);
}

#[test]
fn all_set_enables_every_catalog_entry() {
    let set = ToolSet::all();
    for tool in ToolName::ALL {
        assert!(set.enabled(tool), "{tool} should be enabled");
    }
}
