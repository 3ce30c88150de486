use crate::arg::arg_extractor::{ArgExtractor, extract_at, extract_opt};
use crate::arg::args::{Arg, ColorArg, DateArg, IconArg, IntArg, NameArg};
use crate::command::manual::ManualCatalog;
use crate::command::policies::flag_policy::{FlagDecision, FlagPolicy, HelpAtIdx, RequireFlag};
use crate::core::context::AppContext;
use crate::core::countdown::today;
use crate::core::holidays::holiday_candidates;
use crate::core::models::{Event, EventDraft};
use crate::core::transfer::{export_to_dir, import_file};
use crate::core::types::{EntityActionType, EntityType, EventIcon, Flag, ThemeColor};
use crate::errors::Error::{self, Parse};
use crate::errors::{Result, require_config_item, require_parse};
use crate::logging::LogTarget;
use crate::ui::display_manager::DisplayManager;
use chrono::Local;
use std::path::PathBuf;

pub struct CommandCore<'a> {
    pub args: &'a [Arg],
    pub flag_policy: FlagPolicy,
}
impl<'a> CommandCore<'a> {
    pub fn new(args: &'a [Arg], flag_policy: FlagPolicy) -> Self {
        Self { args, flag_policy }
    }

    fn help_only(args: &'a [Arg]) -> Self {
        Self::new(args, FlagPolicy::new(vec![Box::new(HelpAtIdx(0))]))
    }
}

mod sealed {
    use super::CommandCore;

    pub trait Sealed<'a> {
        fn core(&self) -> &CommandCore<'a>;
    }
}

pub trait Command<'a>: sealed::Sealed<'a> {
    fn usage(&self) -> String;
    fn perform(&self, ctx: &mut AppContext) -> Result<()>;

    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let core = self.core();
        match core.flag_policy.evaluate(core.args) {
            FlagDecision::ShortCircuitUsage => {
                ctx.logger.info(self.usage(), LogTarget::ConsoleOnly);
                Ok(())
            }
            FlagDecision::ShortCircuitMsg(msg) => {
                ctx.logger.info(msg, LogTarget::ConsoleOnly);
                Ok(())
            }
            FlagDecision::Continue => self.perform(ctx),
            FlagDecision::Error(e) => Err(e),
        }
    }
}

pub type CommandDyn<'a> = Box<dyn Command<'a> + 'a>;

macro_rules! impl_sealed {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<'a> sealed::Sealed<'a> for $ty<'a> {
                fn core(&self) -> &CommandCore<'a> {
                    &self.core
                }
            }
        )+
    };
}

impl_sealed!(
    EntityCommand,
    HolidaysCommand,
    ExportCommand,
    ImportCommand,
    ClearCommand,
    ConfigCommand,
    LogCommand,
    ManCommand,
    TypeHelpCommand,
);

/// Position shown in the list (1-based) for the event with `id`.
fn position_of(ctx: &AppContext, id: &str) -> usize {
    ctx.store
        .events()
        .iter()
        .position(|e| e.id == id)
        .map_or(0, |idx| idx + 1)
}

fn id_at_position(ctx: &AppContext, position: usize) -> Result<String> {
    if ctx.store.is_empty() {
        return Err(Error::parse("There are no events yet."));
    }
    let id = require_parse(
        ctx.store.id_at(position),
        format!(
            "No event at position {}. Valid positions: 1-{}",
            position,
            ctx.store.len()
        ),
    )?;
    Ok(id.to_string())
}

/// Optional trailing color and icon, accepted in either order.
fn trailing_style(args: &[Arg]) -> Result<(Option<ThemeColor>, Option<EventIcon>)> {
    let mut color = None;
    let mut icon = None;
    for arg in args {
        let duplicate = if let Some(c) = ColorArg::try_extract(arg) {
            color.replace(c).is_some()
        } else if let Some(i) = IconArg::try_extract(arg) {
            icon.replace(i).is_some()
        } else {
            return Err(Parse(format!(
                "Unexpected argument: {arg}. Only a color and an icon may follow the date."
            )));
        };
        if duplicate {
            return Err(Parse(format!("Duplicate argument: {arg}")));
        }
    }
    Ok((color, icon))
}

pub struct EntityCommand<'a> {
    core: CommandCore<'a>,
    action: EntityActionType,
    entity_type: EntityType,
}

impl<'a> EntityCommand<'a> {
    pub fn new(action: EntityActionType, entity_type: EntityType, args: &'a [Arg]) -> Self {
        let help_idx = match action {
            EntityActionType::Add => 0,
            EntityActionType::Modify | EntityActionType::Delete => 1,
        };
        let policy = FlagPolicy::new(vec![Box::new(HelpAtIdx(help_idx))]);
        Self {
            core: CommandCore::new(args, policy),
            action,
            entity_type,
        }
    }

    /// Name and date at `start`, then optional color/icon.
    fn draft_from(&self, start: usize) -> Result<(EventDraft, Option<ThemeColor>, Option<EventIcon>)> {
        let args = self.core.args;
        let name = extract_at::<NameArg>(args, start)?;
        let date = extract_at::<DateArg>(args, start + 1)?;
        let (color, icon) = trailing_style(args.get(start + 2..).unwrap_or_default())?;
        let draft = EventDraft::new(
            name,
            date.to_storage(),
            color.unwrap_or_default(),
            icon.unwrap_or_default(),
        );
        Ok((draft, color, icon))
    }

    fn handle_list(&self, ctx: &mut AppContext) -> Result<()> {
        DisplayManager::new().display_events(&ctx.store, today(), ctx.config.show_past_events());
        Ok(())
    }

    fn handle_add(&self, ctx: &mut AppContext) -> Result<()> {
        if self.core.args.is_empty() {
            return self.handle_list(ctx);
        }
        let (mut draft, color, icon) = self.draft_from(0)?;
        draft.color = color.unwrap_or_else(|| ctx.config.default_color());
        draft.icon = icon.unwrap_or_else(|| ctx.config.default_icon());

        let stored = ctx.store.add(draft)?;
        let (id, shown) = (stored.id.clone(), stored.to_string());
        let position = position_of(ctx, &id);
        ctx.commit(format!("Added {} #{}: {}", self.entity_type, position, shown))
    }

    fn handle_modify(&self, ctx: &mut AppContext) -> Result<()> {
        let position = extract_at::<IntArg>(self.core.args, 1)?;
        let id = id_at_position(ctx, position)?;
        let (mut draft, color, icon) = self.draft_from(2)?;
        if let Some(current) = ctx.store.get(&id) {
            draft.color = color.unwrap_or(current.color);
            draft.icon = icon.unwrap_or(current.icon);
        }

        ctx.store.edit(&id, draft)?;
        let shown = ctx.store.get(&id).map(Event::to_string).unwrap_or_default();
        let now_at = position_of(ctx, &id);
        ctx.commit(format!(
            "Modified {} #{} (now #{}): {}",
            self.entity_type, position, now_at, shown
        ))
    }

    fn handle_delete(&self, ctx: &mut AppContext) -> Result<()> {
        let position = extract_at::<IntArg>(self.core.args, 1)?;
        if self.core.args.len() > 2 {
            return Err(Parse(format!("Too many arguments.\n{}", self.usage())));
        }
        let id = id_at_position(ctx, position)?;
        match ctx.store.remove(&id) {
            Some(removed) => ctx.commit(format!(
                "Deleted {} #{}: {}",
                self.entity_type, position, removed
            )),
            None => Ok(()),
        }
    }
}

impl<'a> Command<'a> for EntityCommand<'a> {
    fn usage(&self) -> String {
        let et = self.entity_type;
        match self.action {
            EntityActionType::Add => format!(
                "Usage: {et}\nUsage: {et} \"<name>\" <date> [color] [icon]"
            ),
            EntityActionType::Modify => {
                format!("Usage: mod {et} <position> \"<name>\" <date> [color] [icon]")
            }
            EntityActionType::Delete => format!("Usage: del {et} <position>"),
        }
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        match self.action {
            EntityActionType::Add => self.handle_add(ctx),
            EntityActionType::Modify => self.handle_modify(ctx),
            EntityActionType::Delete => self.handle_delete(ctx),
        }
    }
}

pub struct HolidaysCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> HolidaysCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::help_only(args),
        }
    }
}

impl<'a> Command<'a> for HolidaysCommand<'a> {
    fn usage(&self) -> String {
        "holidays     # Add Dutch public holidays for this year and next".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let today = today();
        let inserted = ctx.store.seed_recurring_set(holiday_candidates(today), today);
        if inserted == 0 {
            ctx.logger
                .info("No new holidays to add.", LogTarget::ConsoleOnly);
            return Ok(());
        }
        ctx.commit(format!("Added {inserted} holidays."))
    }
}

pub struct ExportCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ExportCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::help_only(args),
        }
    }
}

impl<'a> Command<'a> for ExportCommand<'a> {
    fn usage(&self) -> String {
        "export       # Write all events to a timestamped JSON file".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let stamp = Local::now().naive_local();
        let path = export_to_dir(ctx.store.events(), &ctx.paths.exports_dir, stamp)?;
        ctx.logger.info(
            format!(
                "Exported {} events to {}",
                ctx.store.len(),
                path.display()
            ),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

pub struct ImportCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ImportCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::help_only(args),
        }
    }
}

impl<'a> Command<'a> for ImportCommand<'a> {
    fn usage(&self) -> String {
        "import \"<path>\"  # Replace all events with the contents of an export file".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let path = PathBuf::from(extract_at::<NameArg>(self.core.args, 0)?);
        let events = import_file(&path)?;
        let count = events.len();
        ctx.store.replace_all(events);
        ctx.commit(format!("Imported {count} events from {}", path.display()))
    }
}

pub struct ClearCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ClearCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        let policy = FlagPolicy::new(vec![
            Box::new(HelpAtIdx(0)),
            Box::new(RequireFlag(
                Flag::Yes,
                "This removes every event. Run 'clear -y' to confirm.".into(),
            )),
        ]);
        Self {
            core: CommandCore::new(args, policy),
        }
    }
}

impl<'a> Command<'a> for ClearCommand<'a> {
    fn usage(&self) -> String {
        "clear -y     # Remove all events".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let count = ctx.store.len();
        ctx.store.remove_all();
        ctx.commit(format!("Cleared {count} events."))
    }
}

pub struct ConfigCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ConfigCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::help_only(args),
        }
    }

    fn set(&self, ctx: &mut AppContext, key: &str, value: &str) -> Result<()> {
        ctx.config.set(key, value)?;
        ctx.logger
            .set_file_logging_enabled(ctx.config.file_logging_enabled());
        let (key, old, new) = require_config_item(ctx.config.take_last_change(), "last_change")?;
        ctx.logger.info(
            format!("Config {key}: {old} -> {new}"),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

impl<'a> Command<'a> for ConfigCommand<'a> {
    fn usage(&self) -> String {
        "Usage: config\nUsage: config <KEY> <value>".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        match self.core.args {
            [] => {
                DisplayManager::new().display_config(&ctx.config);
                Ok(())
            }
            [Arg::Name(key), Arg::Name(value)] => self.set(ctx, key, value),
            _ => Err(Parse(format!(
                "Expected a key and a value.\n{}",
                self.usage()
            ))),
        }
    }
}

pub struct LogCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> LogCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::help_only(args),
        }
    }
}

impl<'a> Command<'a> for LogCommand<'a> {
    fn usage(&self) -> String {
        "log          # Print current session log to console".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        match ctx.logger.session_contents() {
            None => ctx.logger.info("No logs", LogTarget::ConsoleOnly),
            Some(Ok(contents)) => print!("{contents}"),
            Some(Err(err)) => ctx.logger.error(
                format!("Unable to read log file: {err}"),
                LogTarget::ConsoleOnly,
            ),
        }
        Ok(())
    }
}

pub struct ManCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ManCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::help_only(args),
        }
    }

    fn topic_arg(&self) -> Result<Option<&'a str>> {
        if self.core.args.len() > 1 {
            return Err(Parse(
                "Expected at most one topic. Usage: man [topic]".into(),
            ));
        }
        extract_opt::<NameArg>(self.core.args, 0)
    }
}

impl<'a> Command<'a> for ManCommand<'a> {
    fn usage(&self) -> String {
        "man [topic]  # Show manual pages".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let topic = self.topic_arg()?;
        let page = ManualCatalog::new().page_for(topic)?;
        ctx.logger.info(page.render(), LogTarget::ConsoleOnly);
        Ok(())
    }
}

pub struct TypeHelpCommand<'a> {
    core: CommandCore<'a>,
    command_type: crate::core::types::TypeHelpCommand,
}

impl<'a> TypeHelpCommand<'a> {
    pub fn new(args: &'a [Arg], command_type: crate::core::types::TypeHelpCommand) -> Self {
        Self {
            core: CommandCore::help_only(args),
            command_type,
        }
    }
}

impl<'a> Command<'a> for TypeHelpCommand<'a> {
    fn usage(&self) -> String {
        self.command_type.usage()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        ctx.logger
            .info(self.command_type.usage(), LogTarget::ConsoleOnly);
        Ok(())
    }
}

