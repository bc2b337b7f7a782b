//! A line-oriented command interpreter over a tree of integers. Commands use either the numbered
//! menu codes listed in [`MENU`] or their names, followed by whitespace separated integer keys.
//!
//! The interpreter owns no state: [`execute`] takes the current tree and gives back the tree to use
//! for the next command.
//!
//! # Examples
//!
//! ```
//! use avl::shell::{execute, Command};
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//! for line in &["insert 10", "2 20", "insert 30"] {
//!     let command: Command = line.parse().unwrap();
//!     tree = execute(tree, command).0;
//! }
//!
//! let (_tree, reply) = execute(tree, "preorder".parse().unwrap());
//! assert_eq!(reply.as_deref(), Some("Pre-order: 20 10 30"));
//! ```

use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::tree::Tree;
use crate::util::Outcome;

/// The key type the interpreter works with.
pub type Key = i64;

/// The menu shown to interactive users.
pub const MENU: &str = "\
-= AVL tree =-
 1. clear            Create an empty tree
 2. insert KEY       Insert a key
 3. delete KEY       Remove a key
 4. inorder          Show keys in order
 5. preorder         Show keys in pre-order
 6. postorder        Show keys in post-order
 7. graph            Draw the tree
 8. search KEY       Look for a key
 9. edit OLD NEW     Replace a key
10. check            Verify the tree is balanced
11. quit             Exit
";

/// One parsed command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start over with an empty tree.
    Clear,
    /// Insert a key.
    Insert(Key),
    /// Remove a key.
    Delete(Key),
    /// List the keys in order.
    InOrder,
    /// List the keys in pre-order.
    PreOrder,
    /// List the keys in post-order.
    PostOrder,
    /// Draw the tree.
    Graph,
    /// Report whether a key is present.
    Search(Key),
    /// Replace `old` with `new`.
    Edit {
        /// The key to remove.
        old: Key,
        /// The key to insert in its place.
        new: Key,
    },
    /// Verify the AVL invariants.
    Check,
    /// Stop reading commands.
    Quit,
}

/// Why a line couldn't be parsed into a [`Command`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The line had no words.
    #[error("no command given")]
    Empty,
    /// The first word isn't a known command name or menu code.
    #[error("unknown command `{0}`")]
    Unknown(String),
    /// Too few or too many keys followed the command.
    #[error("`{command}` takes {expected} key(s) but {found} were given")]
    Arity {
        /// The command's name.
        command: &'static str,
        /// How many keys it takes.
        expected: usize,
        /// How many were on the line.
        found: usize,
    },
    /// An argument isn't an integer.
    #[error("`{input}` is not a valid key")]
    InvalidKey {
        /// The offending word.
        input: String,
        /// Why it didn't parse.
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let args = words.collect::<Vec<_>>();

        let command = match name.to_ascii_lowercase().as_str() {
            "1" | "clear" => {
                keys::<0>("clear", &args)?;
                Command::Clear
            }
            "2" | "insert" => {
                let [key] = keys::<1>("insert", &args)?;
                Command::Insert(key)
            }
            "3" | "delete" => {
                let [key] = keys::<1>("delete", &args)?;
                Command::Delete(key)
            }
            "4" | "inorder" => {
                keys::<0>("inorder", &args)?;
                Command::InOrder
            }
            "5" | "preorder" => {
                keys::<0>("preorder", &args)?;
                Command::PreOrder
            }
            "6" | "postorder" => {
                keys::<0>("postorder", &args)?;
                Command::PostOrder
            }
            "7" | "graph" => {
                keys::<0>("graph", &args)?;
                Command::Graph
            }
            "8" | "search" => {
                let [key] = keys::<1>("search", &args)?;
                Command::Search(key)
            }
            "9" | "edit" => {
                let [old, new] = keys::<2>("edit", &args)?;
                Command::Edit { old, new }
            }
            "10" | "check" | "balance" => {
                keys::<0>("check", &args)?;
                Command::Check
            }
            "11" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };
        Ok(command)
    }
}

/// Parses exactly `N` integer keys.
fn keys<const N: usize>(command: &'static str, args: &[&str]) -> Result<[Key; N], CommandError> {
    if args.len() != N {
        return Err(CommandError::Arity {
            command,
            expected: N,
            found: args.len(),
        });
    }

    let mut keys = [0; N];
    for (slot, arg) in keys.iter_mut().zip(args) {
        *slot = arg.parse().map_err(|source| CommandError::InvalidKey {
            input: arg.to_string(),
            source,
        })?;
    }
    Ok(keys)
}

fn join<'a>(keys: impl Iterator<Item = &'a Key>) -> String {
    keys.map(Key::to_string).collect::<Vec<_>>().join(" ")
}

/// Runs `command` against `tree`. Returns the tree to use from now on and the text to show the
/// user, if any.
pub fn execute(tree: Tree<Key>, command: Command) -> (Tree<Key>, Option<String>) {
    debug!(?command, "executing");

    match command {
        Command::Clear => (Tree::new(), Some("Created an empty tree.".to_string())),
        Command::Insert(key) => {
            let (tree, outcome) = tree.insert_with_outcome(key);
            let reply = match outcome {
                Outcome::Applied => format!("Inserted {}.", key),
                Outcome::Unchanged => format!("{} is already in the tree.", key),
            };
            (tree, Some(reply))
        }
        Command::Delete(key) => {
            let (tree, outcome) = tree.delete_with_outcome(&key);
            let reply = match outcome {
                Outcome::Applied => format!("Removed {}.", key),
                Outcome::Unchanged => format!("{} is not in the tree.", key),
            };
            (tree, Some(reply))
        }
        Command::InOrder => {
            let reply = format!("In-order: {}", join(tree.in_order()));
            (tree, Some(reply))
        }
        Command::PreOrder => {
            let reply = format!("Pre-order: {}", join(tree.pre_order()));
            (tree, Some(reply))
        }
        Command::PostOrder => {
            let reply = format!("Post-order: {}", join(tree.post_order()));
            (tree, Some(reply))
        }
        Command::Graph => {
            let reply = tree.render();
            (tree, Some(reply))
        }
        Command::Search(key) => {
            let reply = if tree.contains(&key) {
                format!("Found {}.", key)
            } else {
                format!("{} not found.", key)
            };
            (tree, Some(reply))
        }
        Command::Edit { old, new } => {
            let tree = tree.edit(&old, new);
            (tree, Some(format!("Replaced {} with {}.", old, new)))
        }
        Command::Check => {
            let reply = match tree.validate() {
                Ok(()) => "The tree is balanced.".to_string(),
                Err(err) => format!("The tree is corrupt: {}.", err),
            };
            (tree, Some(reply))
        }
        Command::Quit => (tree, None),
    }
}
