use crate::common::command::{current_branch, head_commit, run_git_command, run_git_walk_command};
use crate::common::repository::{WalkRepository, repository_with_history};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn start_checks_out_the_first_commit(
    repository_with_history: WalkRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = repository_with_history;

    run_git_walk_command(repository.path(), &["start"])
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "HEAD is now at {}",
            repository.short_commit(0)
        )));

    assert_eq!(head_commit(repository.path()), repository.commit(0));
    assert_eq!(current_branch(repository.path()), "HEAD");
    assert_eq!(repository.state_file(), "main\n");

    // the working directory matches the first commit
    assert!(repository.path().join("file0.txt").exists());
    assert!(!repository.path().join("file1.txt").exists());
    assert_eq!(
        std::fs::read_to_string(repository.path().join("shared.txt"))?,
        "version 0"
    );

    Ok(())
}

#[rstest]
fn start_with_explicit_commit_checks_it_out(
    repository_with_history: WalkRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = repository_with_history;

    run_git_walk_command(repository.path(), &["start", repository.commit(2)])
        .assert()
        .success();

    assert_eq!(head_commit(repository.path()), repository.commit(2));
    assert_eq!(repository.state_file(), "main\n");

    Ok(())
}

#[rstest]
fn start_with_relative_revision(
    repository_with_history: WalkRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = repository_with_history;

    run_git_walk_command(repository.path(), &["start", "main~1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("HEAD is now at main~1"));

    assert_eq!(head_commit(repository.path()), repository.commit(2));

    Ok(())
}

#[rstest]
fn start_twice_keeps_the_saved_branch(
    repository_with_history: WalkRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = repository_with_history;

    run_git_walk_command(repository.path(), &["start"])
        .assert()
        .success();
    run_git_walk_command(repository.path(), &["next"])
        .assert()
        .success();
    run_git_walk_command(repository.path(), &["start"])
        .assert()
        .success();

    assert_eq!(repository.state_file(), "main\n");
    assert_eq!(head_commit(repository.path()), repository.commit(0));

    Ok(())
}

#[rstest]
fn start_from_detached_head_without_saved_branch_fails(
    repository_with_history: WalkRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = repository_with_history;
    run_git_command(
        repository.path(),
        &["checkout", "--quiet", "--detach", repository.commit(1)],
    )
    .assert()
    .success();

    run_git_walk_command(repository.path(), &["start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("no starting branch was saved"));

    assert_eq!(head_commit(repository.path()), repository.commit(1));
    assert!(!repository.path().join(".git-walk").exists());

    Ok(())
}

#[rstest]
fn start_discards_local_changes(
    repository_with_history: WalkRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = repository_with_history;
    std::fs::write(repository.path().join("shared.txt"), "local edit")?;

    run_git_walk_command(repository.path(), &["start"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(repository.path().join("shared.txt"))?,
        "version 0"
    );

    Ok(())
}

#[rstest]
fn start_with_option_like_target_is_rejected(
    repository_with_history: WalkRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = repository_with_history;

    run_git_walk_command(repository.path(), &["start", "--", "--orphan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid revision"));

    assert_eq!(current_branch(repository.path()), "main");

    Ok(())
}

#[rstest]
fn start_with_unknown_target_fails(
    repository_with_history: WalkRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = repository_with_history;

    run_git_walk_command(repository.path(), &["start", "no-such-branch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));

    Ok(())
}

#[test]
fn start_outside_a_repository_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    run_git_walk_command(dir.path(), &["start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git repository"));

    Ok(())
}

#[rstest]
fn start_honours_a_custom_state_file(
    repository_with_history: WalkRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = repository_with_history;
    let state_dir = TempDir::new()?;
    let state_file = state_dir.path().join("walk-state");

    run_git_walk_command(repository.path(), &["start"])
        .env("GIT_WALK_STATE_FILE", &state_file)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&state_file)?, "main\n");
    assert!(!repository.path().join(".git-walk").exists());

    Ok(())
}

#[rstest]
fn start_with_a_branch_name_detaches_at_its_tip(
    repository_with_history: WalkRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = repository_with_history;
    let dir = repository.path();

    run_git_walk_command(dir, &["start", "main"])
        .assert()
        .success()
        .stderr(predicate::str::contains("HEAD is now at main"));

    assert_eq!(current_branch(dir), "HEAD");
    assert_eq!(head_commit(dir), repository.newest());
    assert_eq!(repository.state_file(), "main\n");

    Ok(())
}
