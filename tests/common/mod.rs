use std::path::Path;

#[allow(unused_imports)]
pub use test_support::{cmd_bin, commit_file, commit_file_at, git, init_repo, tempdir};

pub const BIN: &str = "git-standup";

/// A directory holding several repositories:
///
/// - `alpha`  Ada Lovelace, one recent commit
/// - `beta`   Grace Hopper, one recent commit
/// - `quiet`  Ada Lovelace, only a commit from 2020
/// - `deep/er/hidden`  Ada Lovelace, recent commit, below the default depth
#[allow(dead_code)]
pub fn standup_workspace() -> tempfile::TempDir {
  let td = tempdir();
  let root = td.path();

  repo_with_commit(&root.join("alpha"), "Ada Lovelace", "feat: analytical engine");
  repo_with_commit(&root.join("beta"), "Grace Hopper", "feat: first compiler");

  let quiet = root.join("quiet");
  init_repo(&quiet, "Ada Lovelace");
  commit_file_at(&quiet, "old.txt", "chore: ancient history", "2020-01-01T10:00:00");

  repo_with_commit(&root.join("deep/er/hidden"), "Ada Lovelace", "feat: buried treasure");

  td
}

#[allow(dead_code)]
pub fn repo_with_commit(dir: &Path, user: &str, message: &str) {
  init_repo(dir, user);
  commit_file(dir, "work.txt", message);
}
