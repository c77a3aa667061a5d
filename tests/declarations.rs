//! End-to-end conversion tests.
//!
//! Token graphs are loaded from JSON the way an exporter receives them, then
//! converted with different configurations.

use proptest::prelude::*;
use serde::Deserialize;
use tokencss::{
    token_map, variable_name, Collection, ConvertError, Converter, ExporterConfig, NameStructure,
    Token, TokenGroup, TokenMap, TokenType, TokenValue,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Graph {
    tokens: Vec<Token>,
    groups: Vec<TokenGroup>,
    #[serde(default)]
    collections: Vec<Collection>,
}

const GRAPH: &str = r#"{
    "groups": [
        { "id": "root-space", "name": "Space", "isRoot": true },
        { "id": "root-color", "name": "Color", "isRoot": true },
        { "id": "brand", "name": "Brand", "path": ["Palette"] },
        { "id": "type", "name": "Type" }
    ],
    "collections": [
        { "id": "c-1", "persistentId": "pc-core", "name": "Core" }
    ],
    "tokens": [
        {
            "id": "space-small",
            "name": "small",
            "type": "space",
            "value": { "kind": "dimension", "value": { "measure": 8, "unit": "px" } },
            "parentGroupId": "root-space"
        },
        {
            "id": "brand-primary",
            "name": "Primary",
            "type": "color",
            "value": { "kind": "color", "value": { "r": 0, "g": 85, "b": 255 } },
            "parentGroupId": "brand",
            "collectionId": "pc-core",
            "description": "Primary brand color"
        },
        {
            "id": "action",
            "name": "Action",
            "type": "color",
            "value": { "kind": "reference", "value": "brand-primary" },
            "parentGroupId": "root-color",
            "collectionId": "missing-id"
        },
        {
            "id": "weight-bold",
            "name": "bold",
            "type": "fontWeight",
            "value": { "kind": "text", "value": "700" },
            "parentGroupId": "type"
        },
        {
            "id": "weight-custom",
            "name": "custom",
            "type": "fontWeight",
            "value": { "kind": "text", "value": "bold-custom" },
            "parentGroupId": "type"
        },
        {
            "id": "body-size",
            "name": "body",
            "type": "fontSize",
            "value": { "kind": "dimension", "value": { "measure": 16, "unit": "px" } },
            "parentGroupId": "type"
        },
        {
            "id": "lead-size",
            "name": "lead",
            "type": "fontSize",
            "value": { "kind": "reference", "value": "body-size" },
            "parentGroupId": "type"
        }
    ]
}"#;

fn load() -> (TokenMap, Vec<TokenGroup>, Vec<Collection>) {
    let graph: Graph = serde_json::from_str(GRAPH).expect("fixture parses");
    (token_map(graph.tokens), graph.groups, graph.collections)
}

fn convert(config: &ExporterConfig, id: &str) -> Result<String, ConvertError> {
    let (tokens, groups, collections) = load();
    Converter::new(config, &tokens, &groups, &collections).convert(&tokens[id])
}

#[test]
fn space_token_end_to_end() {
    let config = ExporterConfig {
        token_name_structure: NameStructure::NameOnly,
        ..ExporterConfig::default()
    };
    assert_eq!(convert(&config, "space-small").unwrap(), "  --space-small: 8px;");
}

#[test]
fn description_toggle() {
    let shown = convert(&ExporterConfig::default(), "brand-primary").unwrap();
    let lines: Vec<&str> = shown.lines().collect();
    assert_eq!(
        lines,
        vec![
            "  /* Primary brand color */",
            "  --color-palette-brand-primary: #0055ff;"
        ]
    );

    let hidden_config = ExporterConfig {
        show_descriptions: false,
        ..ExporterConfig::default()
    };
    let hidden = convert(&hidden_config, "brand-primary").unwrap();
    assert_eq!(hidden.lines().count(), 1);
}

#[test]
fn font_weight_normalization() {
    let config = ExporterConfig::default();
    assert_eq!(convert(&config, "weight-bold").unwrap(), "  --type-bold: 700;");
    assert_eq!(
        convert(&config, "weight-custom").unwrap(),
        "  --type-custom: \"bold-custom\";"
    );
}

#[test]
fn legacy_prefix_removed_from_declaration_and_reference() {
    let config = ExporterConfig::default();
    assert_eq!(convert(&config, "body-size").unwrap(), "  --type-body: 16px;");
    assert_eq!(
        convert(&config, "lead-size").unwrap(),
        "  --type-lead: var(--type-body);"
    );
}

#[test]
fn collection_fallback_uses_raw_id() {
    let config = ExporterConfig {
        token_name_structure: NameStructure::CollectionPathAndName,
        ..ExporterConfig::default()
    };
    let line = convert(&config, "action").unwrap();
    assert!(line.contains("missing-id"), "line was {line}");
    assert_eq!(
        line,
        "  --color-missing-id-action: var(--color-core-palette-brand-primary);"
    );
}

#[test]
fn references_inlined_when_disabled() {
    let config = ExporterConfig {
        use_references: false,
        ..ExporterConfig::default()
    };
    assert_eq!(convert(&config, "lead-size").unwrap(), "  --type-lead: 16px;");
}

#[test]
fn force_rem_applies_to_declarations() {
    let config = ExporterConfig {
        force_rem_unit: true,
        ..ExporterConfig::default()
    };
    assert_eq!(convert(&config, "body-size").unwrap(), "  --type-body: 1rem;");
}

#[test]
fn custom_prefix_without_entry_fails() {
    let mut config = ExporterConfig {
        customize_token_prefixes: true,
        ..ExporterConfig::default()
    };
    config.token_prefixes.insert(TokenType::Color, "c".into());

    assert!(convert(&config, "brand-primary").is_ok());
    assert_eq!(
        convert(&config, "space-small"),
        Err(ConvertError::UnresolvedPrefix {
            token_type: TokenType::Space
        })
    );
}

#[test]
fn name_with_nothing_left_is_rejected() {
    let (mut tokens, groups, collections) = load();
    tokens.insert(
        "bang".into(),
        Token::new("bang", "!!", TokenType::Color, TokenValue::reference("brand-primary"), "brand"),
    );
    let mut config = ExporterConfig {
        customize_token_prefixes: true,
        token_name_structure: NameStructure::NameOnly,
        ..ExporterConfig::default()
    };
    config.token_prefixes.insert(TokenType::Color, String::new());
    let converter = Converter::new(&config, &tokens, &groups, &collections);

    assert_eq!(
        converter.convert(&tokens["bang"]),
        Err(ConvertError::EmptyName {
            token: "bang".into()
        })
    );
    assert_eq!(
        converter.convert(&tokens["action"]).unwrap(),
        "  --action: var(--primary);"
    );
}

#[test]
fn batch_conversion_keeps_going_after_fault() {
    let (mut tokens, groups, collections) = load();
    tokens.insert(
        "stray".into(),
        Token::new("stray", "stray", TokenType::Space, TokenValue::px(1.0), "nowhere"),
    );
    let config = ExporterConfig::default();
    let converter = Converter::new(&config, &tokens, &groups, &collections);

    let results = converter.convert_all([&tokens["stray"], &tokens["space-small"]]);
    assert!(results[0].is_err());
    assert_eq!(results[1].as_deref(), Ok("  --space-small: 8px;"));
}

proptest! {
    #[test]
    fn conversion_is_deterministic(
        index in 0usize..7,
        structure in prop_oneof![
            Just(NameStructure::PathAndName),
            Just(NameStructure::NameOnly),
            Just(NameStructure::CollectionPathAndName),
        ],
        use_references in prop::bool::ANY,
        show_descriptions in prop::bool::ANY,
    ) {
        let (tokens, groups, collections) = load();
        let mut ids: Vec<&String> = tokens.keys().collect();
        ids.sort();
        let token = &tokens[ids[index].as_str()];

        let config = ExporterConfig {
            token_name_structure: structure,
            use_references,
            show_descriptions,
            ..ExporterConfig::default()
        };
        let converter = Converter::new(&config, &tokens, &groups, &collections);
        prop_assert_eq!(converter.convert(token), converter.convert(token));
    }

    #[test]
    fn reference_matches_declared_name(
        structure in prop_oneof![
            Just(NameStructure::PathAndName),
            Just(NameStructure::NameOnly),
            Just(NameStructure::CollectionPathAndName),
        ],
        prefix in prop::option::of("[a-z]{0,4}"),
    ) {
        let (tokens, groups, collections) = load();
        let config = ExporterConfig {
            token_name_structure: structure,
            global_name_prefix: prefix,
            ..ExporterConfig::default()
        };
        let converter = Converter::new(&config, &tokens, &groups, &collections);

        for token in tokens.values() {
            if let Some(target_id) = token.value.as_reference() {
                let target = &tokens[target_id];
                let declared = variable_name(target, &groups, &collections, &config).unwrap();
                prop_assert_eq!(
                    converter.value_of(token).unwrap(),
                    format!("var(--{})", declared)
                );
                let line = converter.convert(target).unwrap();
                let declaration = format!("--{}:", declared);
                prop_assert!(line.contains(&declaration));
            }
        }
    }
}
