use student_records::error::ApiError;
use student_records::tooling::cli::Commands;

use crate::support::{ana, ben, temp_cli};

fn add_command(id: &str, name: &str, age: u32, curriculum: &str) -> Commands {
    Commands::Add {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        surname: Some("Tester".to_string()),
        age: Some(age),
        curriculum: Some(curriculum.to_string()),
        overwrite: false,
    }
}

#[test]
fn add_then_show_json_lists_the_student() {
    let (_temp, cli) = temp_cli();
    let output = cli.execute(&add_command("1000001", "Ana", 20, "CS")).unwrap();
    assert!(output.contains("Student added successfully!"));

    let output = cli
        .execute(&Commands::Show {
            query: None,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let students = parsed.as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["id"], "1000001");
    assert_eq!(students[0]["age"], 20);
}

#[test]
fn add_rejects_malformed_id_and_age() {
    let (_temp, cli) = temp_cli();
    let err = cli.execute(&add_command("12345", "Ana", 20, "CS")).unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    let err = cli.execute(&add_command("1234567", "Ana", 15, "CS")).unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert!(cli.repository().list_all().unwrap().is_empty());
}

#[test]
fn add_existing_id_requires_overwrite() {
    let (_temp, cli) = temp_cli();
    cli.execute(&add_command("1000001", "Ana", 20, "CS")).unwrap();
    let err = cli.execute(&add_command("1000001", "Anna", 21, "CS")).unwrap_err();
    assert!(matches!(err, ApiError::StudentExists(_)));

    let output = cli
        .execute(&Commands::Add {
            id: Some("1000001".to_string()),
            name: Some("Anna".to_string()),
            surname: Some("Tester".to_string()),
            age: Some(21),
            curriculum: Some("CS".to_string()),
            overwrite: true,
        })
        .unwrap();
    assert!(output.contains("replaced"));
    assert_eq!(cli.repository().get("1000001").unwrap().unwrap().name, "Anna");
}

#[test]
fn edit_with_flags_updates_only_given_fields() {
    let (_temp, cli) = temp_cli();
    cli.repository().add(&ana()).unwrap();

    cli.execute(&Commands::Edit {
        id: "1000001".to_string(),
        name: None,
        surname: None,
        age: Some(21),
        curriculum: Some("Physics".to_string()),
    })
    .unwrap();

    let stored = cli.repository().get("1000001").unwrap().unwrap();
    assert_eq!(stored.name, "Ana");
    assert_eq!(stored.age, 21);
    assert_eq!(stored.curriculum, "Physics");
}

#[test]
fn edit_unknown_student_is_not_found() {
    let (_temp, cli) = temp_cli();
    let err = cli
        .execute(&Commands::Edit {
            id: "9999999".to_string(),
            name: Some("X".to_string()),
            surname: None,
            age: None,
            curriculum: None,
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::StudentNotFound(_)));
}

#[test]
fn forced_delete_is_idempotent() {
    let (_temp, cli) = temp_cli();
    cli.repository().add(&ana()).unwrap();

    let delete = Commands::Delete {
        id: "1000001".to_string(),
        force: true,
    };
    assert!(cli.execute(&delete).unwrap().contains("deleted successfully"));
    assert!(cli.execute(&delete).unwrap().contains("nothing to delete"));
    assert_eq!(cli.repository().get("1000001").unwrap(), None);
}

#[test]
fn show_query_filters_results() {
    let (_temp, cli) = temp_cli();
    cli.repository().add(&ana()).unwrap();
    cli.repository().add(&ben()).unwrap();

    let output = cli
        .execute(&Commands::Show {
            query: Some("curriculum=math".to_string()),
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let ids: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1000002"]);

    let output = cli
        .execute(&Commands::Show {
            query: Some("name=nobody".to_string()),
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("No students found"));
}

#[test]
fn show_rejects_unknown_format() {
    let (_temp, cli) = temp_cli();
    let err = cli
        .execute(&Commands::Show {
            query: None,
            format: "yaml".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[test]
fn stats_json_contract_has_required_fields() {
    let (_temp, cli) = temp_cli();
    cli.repository().add(&ana()).unwrap();
    cli.repository().add(&ben()).unwrap();

    let output = cli
        .execute(&Commands::Stats {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["total_students"], 2);
    assert_eq!(parsed["average_age"], 22.5);
    assert_eq!(parsed["min_age"], 20);
    assert_eq!(parsed["max_age"], 25);
    let distribution = parsed["curriculum_distribution"].as_array().unwrap();
    assert_eq!(distribution.len(), 2);
    assert!(distribution[0].get("curriculum").is_some());
    assert!(distribution[0].get("count").is_some());
}

#[test]
fn stats_on_empty_store_reports_zeroes() {
    let (_temp, cli) = temp_cli();
    let output = cli
        .execute(&Commands::Stats {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("Total students: 0"));
    assert!(output.contains("Average age: 0.00"));
}

#[test]
fn export_then_import_into_fresh_store() {
    let (temp, cli) = temp_cli();
    cli.repository().add(&ana()).unwrap();
    cli.repository().add(&ben()).unwrap();

    let file = temp.path().join("backup.json");
    let output = cli
        .execute(&Commands::Export { path: file.clone() })
        .unwrap();
    assert!(output.contains("2 student(s)"));

    let (_other_temp, fresh) = temp_cli();
    fresh
        .execute(&Commands::Import { path: file })
        .unwrap();
    let mut restored = fresh.repository().list_all().unwrap();
    restored.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(restored, vec![ana(), ben()]);
}

#[test]
fn import_missing_file_is_reported_and_store_untouched() {
    let (temp, cli) = temp_cli();
    cli.repository().add(&ana()).unwrap();

    let err = cli
        .execute(&Commands::Import {
            path: temp.path().join("nope.json"),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::ImportFileNotFound(_)));
    assert_eq!(cli.repository().list_all().unwrap(), vec![ana()]);
}
