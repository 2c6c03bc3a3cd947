use clap::{CommandFactory, Parser};
use student_records::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["students"],
        vec!["students", "add"],
        vec![
            "students",
            "add",
            "--id",
            "1234567",
            "--name",
            "Sizwe",
            "--surname",
            "Dlamini",
            "--age",
            "20",
            "--curriculum",
            "Engineering",
        ],
        vec!["students", "edit", "1234567"],
        vec!["students", "edit", "1234567", "--age", "21"],
        vec!["students", "delete", "1234567", "--force"],
        vec!["students", "show"],
        vec!["students", "show", "--query", "name=ana,age=20", "--format", "json"],
        vec!["students", "export", "out.json"],
        vec!["students", "import", "in.json"],
        vec!["students", "stats", "--format", "json"],
        vec!["students", "--root", "/tmp/students", "interactive"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_missing_ids_and_bad_ages() {
    assert!(Cli::try_parse_from(["students", "edit"]).is_err());
    assert!(Cli::try_parse_from(["students", "delete"]).is_err());
    assert!(Cli::try_parse_from(["students", "add", "--age", "twenty"]).is_err());
    assert!(Cli::try_parse_from(["students", "export"]).is_err());
}

#[test]
fn edit_flags_map_into_command() {
    let cli = Cli::try_parse_from(["students", "edit", "1234567", "--name", "Thabo"]).unwrap();
    match cli.command {
        Some(Commands::Edit { id, name, age, .. }) => {
            assert_eq!(id, "1234567");
            assert_eq!(name.as_deref(), Some("Thabo"));
            assert_eq!(age, None);
        }
        _ => panic!("expected edit command"),
    }
}

#[test]
fn help_lists_every_command() {
    let help = Cli::command().render_long_help().to_string();
    for name in ["add", "edit", "delete", "show", "export", "import", "stats", "interactive"] {
        assert!(help.contains(name), "help is missing {name}");
    }
}
