//! Wire format conversion tests

use ontology_schema_sdk::convert::{
    WireDocument, from_wire_format, from_wire_value, to_wire_format,
};
use ontology_schema_sdk::models::{
    Attribute, Cardinality, Direction, Entity, OntologyModel, Relation,
};
use ontology_schema_sdk::validation::{has_errors, validate_model};
use serde_json::{Value, json};
use std::collections::{BTreeMap, BTreeSet};

fn sample_model() -> OntologyModel {
    let mut person = Entity::new("Person").with_id("p");
    person.display_name = Some("Person".to_string());
    person.attributes.push(
        Attribute::new("email", "string")
            .required()
            .with_constraint("pattern", json!("^.+@.+$")),
    );
    person.attributes.push(Attribute::new("tags", "array<array<string>>"));
    let mut age = Attribute::new("age", "integer");
    age.unique = Some(false);
    person.attributes.push(age);

    let mut company = Entity::new("Company").with_id("c");
    company.attributes.push(Attribute::new("company_id", "string").required());

    let mut works_at = Relation::new("p", "c", "Person", "Company")
        .with_id("r")
        .with_name("worksAt")
        .with_cardinality(Cardinality::ManyToOne)
        .with_property_mapping("company_id", "id");
    works_at.properties = Some(vec![Attribute::new("since", "date")]);

    let mut partners = Relation::new("c", "p", "Company", "Person")
        .with_id("r2")
        .with_name("partners")
        .with_cardinality(Cardinality::ManyToMany);
    partners.direction = Direction::Undirected;
    partners.property_mappings = Some(BTreeMap::new());

    let mut model = OntologyModel::new("hr");
    model.entities = vec![person, company];
    model.relations = vec![works_at, partners];
    model
}

type AttributeTuple = (String, String, String, bool, bool);
type RelationTuple = (String, String, String, Cardinality, Direction, BTreeMap<String, String>);

fn attribute_tuples(model: &OntologyModel) -> BTreeSet<AttributeTuple> {
    model
        .entities
        .iter()
        .flat_map(|e| {
            e.attributes.iter().map(move |a| {
                (e.name.clone(), a.name.clone(), a.data_type.clone(), a.required, a.is_unique())
            })
        })
        .collect()
}

fn relation_tuples(model: &OntologyModel) -> Vec<RelationTuple> {
    model
        .relations
        .iter()
        .map(|r| {
            (
                r.name.clone(),
                r.source_type.clone(),
                r.target_type.clone(),
                r.cardinality,
                r.direction,
                r.property_mappings.clone().unwrap_or_default(),
            )
        })
        .collect()
}

mod outbound_tests {
    use super::*;

    #[test]
    fn test_document_shape() {
        let value = serde_json::to_value(to_wire_format(&sample_model())).unwrap();
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["namespace"], "ontology.builder");
        assert_eq!(value["data_sources"], json!([]));
        assert!(value.get("name").is_none());
        assert_eq!(value["object_types"].as_array().unwrap().len(), 2);
        assert_eq!(value["link_types"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_property_constraints() {
        let value = serde_json::to_value(to_wire_format(&sample_model())).unwrap();
        let props = value["object_types"][0]["properties"].as_array().unwrap();

        assert_eq!(props[0]["name"], "id");
        assert_eq!(props[0]["constraints"], json!({"unique": true}));
        assert_eq!(props[1]["constraints"], json!({"pattern": "^.+@.+$"}));
        assert_eq!(props[2]["constraints"], Value::Null);
        assert_eq!(props[3]["constraints"], json!({"unique": false}));
        assert_eq!(props[3]["data_type"], "integer");
        assert_eq!(props[2]["description"], Value::Null);
        assert!(props.iter().all(|p| p.get("display_name").is_none()));
    }

    #[test]
    fn test_no_constraints_and_no_unique_emit_null() {
        let mut model = sample_model();
        model.entities[1].attributes = vec![Attribute::new("plain", "string")];
        let value = serde_json::to_value(to_wire_format(&model)).unwrap();
        let prop = &value["object_types"][1]["properties"][0];
        assert!(prop.as_object().unwrap().contains_key("constraints"));
        assert_eq!(prop["constraints"], Value::Null);
    }

    #[test]
    fn test_link_types() {
        let value = serde_json::to_value(to_wire_format(&sample_model())).unwrap();
        let works_at = &value["link_types"][0];
        assert_eq!(works_at["cardinality"], "many-to-one");
        assert_eq!(works_at["direction"], "directed");
        assert_eq!(works_at["property_mappings"], json!({"company_id": "id"}));
        assert_eq!(works_at["properties"][0]["data_type"], "date");
        assert!(works_at.get("source").is_none());

        let partners = &value["link_types"][1];
        assert_eq!(partners["cardinality"], "many-to-many");
        assert_eq!(partners["direction"], "undirected");
        assert!(partners.as_object().unwrap().contains_key("property_mappings"));
        assert_eq!(partners["property_mappings"], Value::Null);
    }

    #[test]
    fn test_link_properties_share_the_attribute_codec() {
        let mut model = sample_model();
        model.relations[0]
            .properties
            .get_or_insert_with(Vec::new)
            .push(Attribute::new("badge", "string").unique());
        let value = serde_json::to_value(to_wire_format(&model)).unwrap();
        let props = value["link_types"][0]["properties"].as_array().unwrap();

        assert!(props[0].as_object().unwrap().contains_key("constraints"));
        assert_eq!(props[0]["constraints"], Value::Null);
        assert_eq!(props[1]["constraints"], json!({"unique": true}));
        assert!(props[1].get("unique").is_none());
    }

    #[test]
    fn test_undefined_property_mappings_and_properties_are_omitted() {
        let mut model = sample_model();
        model.relations[0].property_mappings = None;
        model.relations[0].properties = None;
        let value = serde_json::to_value(to_wire_format(&model)).unwrap();
        let link = value["link_types"][0].as_object().unwrap();
        assert!(!link.contains_key("property_mappings"));
        assert!(!link.contains_key("properties"));
    }

    #[test]
    fn test_conversion_does_not_validate() {
        let mut model = sample_model();
        model.version = String::new();
        model.entities[0].attributes[0].data_type = "bogus".to_string();
        let doc = to_wire_format(&model);
        assert_eq!(doc.version, "");
        assert_eq!(doc.object_types[0].properties[0].data_type, "bogus");
    }
}

mod inbound_tests {
    use super::*;

    fn backend_document() -> Value {
        json!({
            "version": "2.1.0",
            "namespace": "hr.ontology",
            "object_types": [
                {
                    "name": "Person",
                    "display_name": "Human",
                    "description": "A person",
                    "base_type": null,
                    "properties": [
                        {"name": "id", "data_type": "string", "required": true,
                         "description": null, "default_value": null,
                         "constraints": {"unique": true}},
                        {"name": "nickname", "data_type": "string",
                         "constraints": {"max_length": 20}, "display_name": "Nick"}
                    ]
                },
                {"name": "Company", "properties": [
                    {"name": "id", "data_type": "string", "required": true, "unique": true}
                ]}
            ],
            "link_types": [
                {"name": "worksAt", "source_type": "Person", "target_type": "Company",
                 "cardinality": "one-to-many", "direction": "directed",
                 "property_mappings": {"employer": "id"}},
                {"name": "foundedBy", "source_type": "Company", "target_type": "Founder",
                 "cardinality": "lots"}
            ],
            "data_sources": []
        })
    }

    #[test]
    fn test_ids_are_positional() {
        let model = from_wire_value(&backend_document());
        assert_eq!(model.entities[0].id, "entity-0");
        assert_eq!(model.entities[1].id, "entity-1");
        assert_eq!(model.relations[0].id, "relation-0");
        assert_eq!(model.relations[1].id, "relation-1");
        assert!(model.id.starts_with("model-"));
    }

    #[test]
    fn test_model_defaults() {
        let model = from_wire_value(&backend_document());
        assert_eq!(model.name, "Untitled Model");
        assert_eq!(model.version, "2.1.0");
        assert_eq!(model.namespace, "hr.ontology");

        let empty = from_wire_value(&json!({}));
        assert_eq!(empty.version, "1.0.0");
        assert_eq!(empty.namespace, "ontology.builder");
        assert!(empty.entities.is_empty());
        assert!(empty.relations.is_empty());

        let not_an_object = from_wire_value(&json!("nope"));
        assert_eq!(not_an_object.name, "Untitled Model");
    }

    #[test]
    fn test_entity_fields() {
        let model = from_wire_value(&backend_document());
        let person = &model.entities[0];
        assert_eq!(person.label, "Human");
        assert_eq!(person.description.as_deref(), Some("A person"));
        assert!(person.base_type.is_none());
        assert!(person.position.is_none());
        assert_eq!(model.entities[1].label, "Company");
    }

    #[test]
    fn test_unique_is_extracted_from_constraints() {
        let model = from_wire_value(&backend_document());
        let id = &model.entities[0].attributes[0];
        assert_eq!(id.unique, Some(true));
        assert!(id.constraints.is_none());
        assert!(id.required);

        let nickname = &model.entities[0].attributes[1];
        assert_eq!(nickname.unique, None);
        assert!(!nickname.required);
        assert_eq!(nickname.display_name.as_deref(), Some("Nick"));
        assert_eq!(nickname.constraints.as_ref().unwrap()["max_length"], json!(20));

        let legacy = &model.entities[1].attributes[0];
        assert_eq!(legacy.unique, Some(true));
    }

    #[test]
    fn test_link_property_unique_is_extracted_from_constraints() {
        let mut document = backend_document();
        document["link_types"][0]["properties"] = json!([
            {"name": "badge", "data_type": "string",
             "constraints": {"unique": true, "max_length": 3}}
        ]);
        let model = from_wire_value(&document);
        let badge = &model.relations[0].properties.as_ref().unwrap()[0];
        assert_eq!(badge.unique, Some(true));
        let constraints = badge.constraints.as_ref().unwrap();
        assert!(!constraints.contains_key("unique"));
        assert_eq!(constraints["max_length"], json!(3));
    }

    #[test]
    fn test_relation_endpoints_resolve_by_name() {
        let model = from_wire_value(&backend_document());
        let works_at = &model.relations[0];
        assert_eq!(works_at.source, "entity-0");
        assert_eq!(works_at.target, "entity-1");
        assert_eq!(works_at.cardinality, Cardinality::OneToMany);
        assert_eq!(
            works_at.property_mappings.as_ref().unwrap()["employer"],
            "id".to_string()
        );
        assert_eq!(works_at.properties, Some(Vec::new()));
    }

    #[test]
    fn test_unresolved_endpoint_is_left_for_the_validator() {
        let model = from_wire_value(&backend_document());
        let founded_by = &model.relations[1];
        assert_eq!(founded_by.source, "entity-1");
        assert_eq!(founded_by.target, "");
        assert_eq!(founded_by.cardinality, Cardinality::OneToMany);
        assert_eq!(founded_by.direction, Direction::Directed);
        assert!(founded_by.property_mappings.is_none());

        let issues = validate_model(&model);
        assert!(has_errors(&issues));
        assert!(
            issues
                .iter()
                .any(|i| i.relation_id.as_deref() == Some("relation-1")
                    && i.message.contains("Founder"))
        );
    }

    #[test]
    fn test_first_entity_wins_for_duplicate_names() {
        let model = from_wire_value(&json!({
            "object_types": [{"name": "A"}, {"name": "A"}, {"name": "B"}],
            "link_types": [{"name": "ab", "source_type": "A", "target_type": "B"}]
        }));
        assert_eq!(model.relations[0].source, "entity-0");
        assert_eq!(model.relations[0].target, "entity-2");
    }

    #[test]
    fn test_null_property_mappings_become_none() {
        let model = from_wire_value(&json!({
            "object_types": [{"name": "A"}, {"name": "B"}],
            "link_types": [{"name": "ab", "source_type": "A", "target_type": "B",
                            "property_mappings": null}]
        }));
        assert!(model.relations[0].property_mappings.is_none());
    }
}

mod round_trip_tests {
    use super::*;

    #[test]
    fn test_semantic_content_survives() {
        let model = sample_model();
        let reloaded = from_wire_format(&to_wire_format(&model));
        assert_eq!(attribute_tuples(&reloaded), attribute_tuples(&model));
        assert_eq!(relation_tuples(&reloaded), relation_tuples(&model));
    }

    #[test]
    fn test_repeated_round_trips_are_stable() {
        let once = from_wire_format(&to_wire_format(&sample_model()));
        let twice = from_wire_format(&to_wire_format(&once));
        assert_eq!(attribute_tuples(&once), attribute_tuples(&twice));
        assert_eq!(relation_tuples(&once), relation_tuples(&twice));
        assert_eq!(
            to_wire_format(&once).object_types,
            to_wire_format(&twice).object_types
        );
    }

    #[test]
    fn test_valid_model_stays_valid() {
        let model = sample_model();
        assert!(!has_errors(&validate_model(&model)));
        let reloaded = from_wire_format(&to_wire_format(&model));
        assert!(!has_errors(&validate_model(&reloaded)));
    }

    #[test]
    fn test_cardinality_round_trip_for_all_values() {
        for cardinality in Cardinality::ALL {
            let mut model = sample_model();
            model.relations[0].cardinality = cardinality;
            let reloaded = from_wire_format(&to_wire_format(&model));
            assert_eq!(reloaded.relations[0].cardinality, cardinality);
        }
    }

    #[test]
    fn test_json_text_round_trip() {
        let text = to_wire_format(&sample_model()).to_json_string().unwrap();
        let doc = WireDocument::from_json_str(&text).unwrap();
        let reloaded = from_wire_format(&doc);
        assert_eq!(attribute_tuples(&reloaded), attribute_tuples(&sample_model()));
    }

    #[test]
    fn test_yaml_text_round_trip() {
        let text = to_wire_format(&sample_model()).to_yaml_string().unwrap();
        let doc = WireDocument::from_yaml_str(&text).unwrap();
        assert_eq!(doc, to_wire_format(&sample_model()));
    }
}
