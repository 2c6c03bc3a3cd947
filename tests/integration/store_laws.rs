use proptest::prelude::*;
use student_records::student::{
    CorruptRecordPolicy, SearchFilter, ShardedFileRepository, StudentRepository,
};

use crate::support::{ana, any_student, ben, sorted, student_id, student_set, temp_store};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn get_after_add_returns_the_record(student in any_student()) {
        let (_temp, repo) = temp_store();
        repo.add(&student).unwrap();
        prop_assert_eq!(repo.get(&student.id).unwrap(), Some(student));
    }

    #[test]
    fn delete_then_get_is_none(id in student_id(), stored in any::<bool>()) {
        let (_temp, repo) = temp_store();
        if stored {
            repo.add(&ana_with_id(&id)).unwrap();
        }
        repo.delete(&id).unwrap();
        prop_assert_eq!(repo.get(&id).unwrap(), None);
        repo.delete(&id).unwrap();
        prop_assert_eq!(repo.get(&id).unwrap(), None);
    }

    #[test]
    fn update_then_get_returns_new_record(first in any_student(), second in any_student()) {
        let (_temp, repo) = temp_store();
        repo.add(&first).unwrap();
        let mut replacement = second;
        replacement.id = first.id.clone();
        repo.update(&replacement).unwrap();
        prop_assert_eq!(repo.get(&first.id).unwrap(), Some(replacement));
    }

    #[test]
    fn unfiltered_search_returns_live_records(students in student_set(12), drop_every in 2usize..4) {
        let (_temp, repo) = temp_store();
        for s in &students {
            repo.add(s).unwrap();
        }
        let mut live = Vec::new();
        for (i, s) in students.iter().enumerate() {
            if i % drop_every == 0 {
                repo.delete(&s.id).unwrap();
            } else {
                live.push(s.clone());
            }
        }
        prop_assert_eq!(sorted(repo.search(&SearchFilter::all()).unwrap()), sorted(live));
    }

    #[test]
    fn export_import_round_trip(students in student_set(12)) {
        let (temp, source) = temp_store();
        for s in &students {
            source.add(s).unwrap();
        }
        let file = temp.path().join("export.json");
        prop_assert_eq!(source.export(&file).unwrap(), students.len());

        let target = ShardedFileRepository::open(temp.path().join("restored")).unwrap();
        prop_assert_eq!(target.import(&file).unwrap(), students.len());
        prop_assert_eq!(sorted(target.list_all().unwrap()), sorted(students));
    }
}

fn ana_with_id(id: &str) -> student_records::student::Student {
    let mut s = ana();
    s.id = id.to_string();
    s
}

#[test]
fn curriculum_search_and_statistics_scenario() {
    let (_temp, repo) = temp_store();
    repo.add(&ana()).unwrap();
    repo.add(&ben()).unwrap();

    let cs = repo
        .search(&SearchFilter::all().with_curriculum("CS"))
        .unwrap();
    assert_eq!(cs, vec![ana()]);

    let stats = repo.statistics().unwrap();
    assert_eq!(stats.total_students, 2);
    assert_eq!(stats.average_age, 22.5);
    assert_eq!(stats.min_age, 20);
    assert_eq!(stats.max_age, 25);
    let distribution: Vec<(String, usize)> = stats
        .curriculum_distribution
        .into_iter()
        .map(|c| (c.curriculum, c.count))
        .collect();
    assert_eq!(
        distribution,
        vec![("CS".to_string(), 1), ("Math".to_string(), 1)]
    );
}

#[test]
fn get_unknown_id_on_empty_store_is_none() {
    let (_temp, repo) = temp_store();
    assert_eq!(repo.get("9999999").unwrap(), None);
}

#[test]
fn corrupt_policy_controls_scan_outcome() {
    let (temp, repo) = temp_store();
    repo.add(&ana()).unwrap();
    let shard = repo.root().join("55");
    std::fs::create_dir_all(&shard).unwrap();
    std::fs::write(shard.join("5500000.json"), "{\"id\": 5}").unwrap();

    assert_eq!(repo.list_all().unwrap(), vec![ana()]);

    let strict = ShardedFileRepository::new(temp.path().join("students"))
        .with_corrupt_policy(CorruptRecordPolicy::Abort);
    assert!(strict.list_all().is_err());
    assert!(strict.export(&temp.path().join("out.json")).is_err());
}

#[test]
fn reads_records_written_by_the_console_tool() {
    let (_temp, repo) = temp_store();
    let shard = repo.root().join("12");
    std::fs::create_dir_all(&shard).unwrap();
    std::fs::write(
        shard.join("1234567.json"),
        r#"{"Id":"1234567","Name":"Sizwe","Surname":"Dlamini","Age":20,"Curriculum":"Engineering"}"#,
    )
    .unwrap();

    let found = repo
        .search(&SearchFilter::parse("name=sizwe, age=20"))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].surname, "Dlamini");
}
