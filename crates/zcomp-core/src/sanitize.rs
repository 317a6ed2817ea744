//! zsh function names for command paths

use std::collections::HashSet;

/// Turn a command name into a zsh function name fragment: `build-all` ->
/// `_build_all`.
pub fn sanitize(name: &str) -> String {
    format!("_{}", name.replace('-', "_"))
}

/// Function name for `child` under a parent whose function is `parent_id`.
pub fn child_identifier(parent_id: &str, child: &str) -> String {
    format!("{parent_id}_{}", sanitize(child))
}

/// Name of the function listing the sub-commands of `id`.
pub fn commands_identifier(id: &str) -> String {
    format!("{id}_commands")
}

/// Identifiers handed out during one generation run.
///
/// Distinct paths can still map to one name when siblings differ only in
/// `-` versus `_`; later claimants get a numeric suffix.
#[derive(Debug, Default)]
pub struct Identifiers {
    taken: HashSet<String>,
}

impl Identifiers {
    /// Claim `id` and its companion list function as a pair.
    ///
    /// Both names are reserved together so that the list function of one
    /// command can never shadow the function of another.
    pub fn claim_command(&mut self, candidate: String) -> String {
        let mut id = candidate.clone();
        let mut n = 1;
        while self.taken.contains(&id) || self.taken.contains(&commands_identifier(&id)) {
            n += 1;
            id = format!("{candidate}_{n}");
        }
        self.taken.insert(commands_identifier(&id));
        self.taken.insert(id.clone());
        id
    }
}
