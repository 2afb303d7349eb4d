//! List management commands.

use colored::Colorize;
use serde_json::json;

use super::CommandContext;
use crate::cli::args::{ListsCommands, OutputFormat};
use crate::error::TaskhintError;
use crate::output::{format_list, format_lists};
use crate::tasks::{ListId, TaskList};

/// Find one of the user's own lists. The shared Inbox does not count.
fn owned_list(ctx: &CommandContext<'_>, id: ListId) -> Result<TaskList, TaskhintError> {
    let list = ctx
        .store
        .lists_for_owner(ctx.owner)?
        .into_iter()
        .find(|l| l.id == id)
        .ok_or_else(|| TaskhintError::NotFound(format!("list {id}")))?;

    if list.is_inbox() {
        return Err(TaskhintError::InvalidInput(
            "the Inbox cannot be renamed or removed".to_string(),
        ));
    }
    Ok(list)
}

/// Execute list subcommands.
///
/// # Errors
///
/// Returns an error if the list does not exist, the name is blank, the
/// Inbox is targeted by rename or remove, or the store fails.
pub fn lists(ctx: &CommandContext<'_>, cmd: ListsCommands) -> Result<String, TaskhintError> {
    match cmd {
        ListsCommands::Show => {
            let lists = ctx.store.lists_for_owner(ctx.owner)?;
            format_lists(&lists, ctx.format)
        },
        ListsCommands::Add { name } => {
            let list = ctx.store.create_list(ctx.owner, &name)?;
            log::info!("created list {}", list.id);
            changed(ctx.format, "Created list:", &list)
        },
        ListsCommands::Rename { id, name } => {
            owned_list(ctx, id)?;
            let list = ctx.store.rename_list(id, &name)?;
            changed(ctx.format, "Renamed list:", &list)
        },
        ListsCommands::Remove { id } => {
            let list = owned_list(ctx, id)?;
            ctx.store.remove_list(id)?;
            log::info!("removed list {id}");

            match ctx.format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                    "removed": true,
                    "id": id,
                    "name": list.name,
                }))?),
                OutputFormat::Pretty => Ok(format!(
                    "{} {} (tasks moved to the Inbox)",
                    "Removed list:".red().bold(),
                    list.name
                )),
            }
        },
    }
}

fn changed(format: OutputFormat, label: &str, list: &TaskList) -> Result<String, TaskhintError> {
    match format {
        OutputFormat::Json => format_list(list, format),
        OutputFormat::Pretty => Ok(format!("{} {}", label.green().bold(), format_list(list, format)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{now, OWNER};
    use super::*;
    use crate::features::nlp::Annotator;
    use crate::tasks::MockTaskStore;
    use mockall::predicate::eq;

    fn ctx<'a>(store: &'a MockTaskStore, annotator: &'a Annotator) -> CommandContext<'a> {
        CommandContext {
            store,
            annotator,
            owner: OWNER,
            now: now(),
            format: OutputFormat::Json,
        }
    }

    fn inbox_and_work() -> Vec<TaskList> {
        vec![
            TaskList {
                id: 1,
                name: "Inbox".to_string(),
                owner: None,
            },
            TaskList {
                id: 2,
                name: "Work".to_string(),
                owner: Some(OWNER.to_string()),
            },
        ]
    }

    #[test]
    fn test_lists_show() {
        let mut store = MockTaskStore::new();
        store
            .expect_lists_for_owner()
            .with(eq(OWNER))
            .returning(|_| Ok(inbox_and_work()));

        let annotator = Annotator::default();
        let output = lists(&ctx(&store, &annotator), ListsCommands::Show).unwrap();
        assert!(output.contains("\"count\": 2"));
        assert!(output.contains("\"Work\""));
    }

    #[test]
    fn test_lists_add() {
        let mut store = MockTaskStore::new();
        store
            .expect_create_list()
            .with(eq(OWNER), eq("Errands"))
            .times(1)
            .returning(|owner, name| {
                Ok(TaskList {
                    id: 3,
                    name: name.to_string(),
                    owner: Some(owner.to_string()),
                })
            });

        let annotator = Annotator::default();
        let cmd = ListsCommands::Add {
            name: "Errands".to_string(),
        };
        let output = lists(&ctx(&store, &annotator), cmd).unwrap();
        assert!(output.contains("\"id\": 3"));
    }

    #[test]
    fn test_lists_rename_inbox_rejected() {
        let mut store = MockTaskStore::new();
        store
            .expect_lists_for_owner()
            .returning(|_| Ok(inbox_and_work()));
        store.expect_rename_list().never();

        let annotator = Annotator::default();
        let cmd = ListsCommands::Rename {
            id: 1,
            name: "Mine".to_string(),
        };
        let err = lists(&ctx(&store, &annotator), cmd).unwrap_err();
        assert!(matches!(err, TaskhintError::InvalidInput(_)));
    }

    #[test]
    fn test_lists_rename_unknown() {
        let mut store = MockTaskStore::new();
        store
            .expect_lists_for_owner()
            .returning(|_| Ok(inbox_and_work()));

        let annotator = Annotator::default();
        let cmd = ListsCommands::Rename {
            id: 9,
            name: "Other".to_string(),
        };
        let err = lists(&ctx(&store, &annotator), cmd).unwrap_err();
        assert!(matches!(err, TaskhintError::NotFound(_)));
    }

    #[test]
    fn test_lists_remove() {
        let mut store = MockTaskStore::new();
        store
            .expect_lists_for_owner()
            .returning(|_| Ok(inbox_and_work()));
        store
            .expect_remove_list()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(()));

        let annotator = Annotator::default();
        let output = lists(&ctx(&store, &annotator), ListsCommands::Remove { id: 2 }).unwrap();
        assert!(output.contains("\"removed\": true"));
        assert!(output.contains("\"name\": \"Work\""));
    }
}
