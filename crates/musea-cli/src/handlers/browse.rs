//! Interactive browsing session.
//!
//! The session owns the page state; every command produces a new state and
//! an effect for the loop to carry out. Parsing and state transitions are
//! pure so they can be tested without a terminal or a network.

use anyhow::Result;
use musea_core::{
    ArtworkId, BrowsePage, FetchOutcome, FilterOptions, NavAction, Navigation, PageSize, PageState,
};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::bootstrap::CliContext;
use crate::commands::ViewArgs;
use crate::error::CliError;
use crate::presentation::{render_detail, render_page};

const PROMPT: &str = "musea> ";

const HELP: &str = "\
Commands:
  next | prev | first      move between pages
  page N                   jump to page N
  size N                   results per page (9, 12, 15, 18, 21, 24)
  query TEXT               new search, back to page 1
  show ID                  open the detail view for an artwork
  close                    close the detail view
  images on|off            only items with an image
  public on|off            only public-domain items
  clear-cache              drop cached responses and reload
  help                     this text
  quit                     leave";

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Next,
    Prev,
    First,
    Page(u32),
    Size(u32),
    Query(String),
    Show(ArtworkId),
    Close,
    Images(bool),
    Public(bool),
    ClearCache,
    Help,
    Quit,
}

fn parse_number<T: std::str::FromStr>(arg: &str, what: &str) -> Result<T, String> {
    arg.trim()
        .parse()
        .map_err(|_| format!("Expected {what}, got '{arg}'."))
}

fn parse_toggle(arg: &str) -> Result<bool, String> {
    match arg.trim().to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" => Ok(true),
        "off" | "no" | "false" => Ok(false),
        _ => Err(format!("Expected on or off, got '{arg}'.")),
    }
}

/// Parse one line of input.
pub fn parse_command(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim();
    let (word, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let arg = arg.trim();

    let command = match word.to_ascii_lowercase().as_str() {
        "next" | "n" => ReplCommand::Next,
        "prev" | "p" => ReplCommand::Prev,
        "first" => ReplCommand::First,
        "page" => ReplCommand::Page(parse_number(arg, "a page number")?),
        "size" => ReplCommand::Size(parse_number(arg, "a page size")?),
        "query" | "q" if !arg.is_empty() => ReplCommand::Query(arg.to_string()),
        "query" | "q" => return Err("Usage: query TEXT".to_string()),
        "show" => ReplCommand::Show(parse_number(arg, "an artwork id")?),
        "close" => ReplCommand::Close,
        "images" => ReplCommand::Images(parse_toggle(arg)?),
        "public" => ReplCommand::Public(parse_toggle(arg)?),
        "clear-cache" => ReplCommand::ClearCache,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        other => return Err(format!("Unknown command '{other}'. Type `help`.")),
    };
    Ok(command)
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Render the current page again
    Reload,
    /// Render the detail view for the selection
    ShowDetail,
    /// Clear the response cache, then reload
    ClearCache,
    Help,
    Quit,
    /// Print a message; state is unchanged
    Message(String),
}

/// Page state plus the navigation computed for the last rendered page.
#[derive(Debug, Clone)]
pub struct Session {
    state: PageState,
    filters: FilterOptions,
    navigation: Navigation,
}

impl Session {
    pub fn new(state: PageState, filters: FilterOptions) -> Self {
        let navigation = Navigation::new(state.page, 1);
        Self {
            state,
            filters,
            navigation,
        }
    }

    pub const fn state(&self) -> &PageState {
        &self.state
    }

    pub const fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    /// Remember the controls of the page just rendered.
    pub fn record_page(&mut self, page: &BrowsePage) {
        self.navigation = page.navigation;
    }

    fn navigate(&mut self, action: NavAction, at_edge: &str) -> SessionEffect {
        let Some(target) = self.navigation.target(action) else {
            return SessionEffect::Message(at_edge.to_string());
        };
        self.go_to(target)
    }

    fn go_to(&mut self, page: u32) -> SessionEffect {
        match self.state.with_page(page) {
            Ok(state) => {
                self.state = state;
                SessionEffect::Reload
            }
            Err(err) => SessionEffect::Message(err.to_string()),
        }
    }

    /// Apply a command to the state.
    pub fn apply(&mut self, command: ReplCommand) -> SessionEffect {
        match command {
            ReplCommand::Next => self.navigate(NavAction::Next, "Already on the last page."),
            ReplCommand::Prev => self.navigate(NavAction::Previous, "Already on the first page."),
            ReplCommand::First => self.navigate(NavAction::First, "Already on the first page."),
            ReplCommand::Page(page) => self.go_to(page),
            ReplCommand::Size(size) => match PageSize::try_from(size) {
                Ok(size) => {
                    self.state = self.state.with_page_size(size);
                    SessionEffect::Reload
                }
                Err(err) => SessionEffect::Message(err.to_string()),
            },
            ReplCommand::Query(query) => {
                self.state = self.state.with_query(query);
                SessionEffect::Reload
            }
            ReplCommand::Show(id) => {
                self.state = self.state.with_selection(Some(id));
                SessionEffect::ShowDetail
            }
            ReplCommand::Close => {
                if self.state.selected_id.is_none() {
                    return SessionEffect::Message("No artwork is open.".to_string());
                }
                self.state = self.state.with_selection(None);
                SessionEffect::Reload
            }
            ReplCommand::Images(enabled) => {
                self.filters = self.filters.with_require_image(enabled);
                SessionEffect::Reload
            }
            ReplCommand::Public(enabled) => {
                self.filters = self.filters.with_require_public_domain(enabled);
                SessionEffect::Reload
            }
            ReplCommand::ClearCache => SessionEffect::ClearCache,
            ReplCommand::Help => SessionEffect::Help,
            ReplCommand::Quit => SessionEffect::Quit,
        }
    }
}

async fn show_page(ctx: &CliContext, session: &mut Session) {
    let page = ctx
        .browse()
        .load_page(session.state(), session.filters())
        .await;
    session.record_page(&page);
    print!("{}", render_page(&page));
}

async fn show_selected(ctx: &CliContext, session: &Session) {
    match ctx.browse().load_selected(session.state()).await {
        Some(FetchOutcome::Loaded(detail)) => {
            print!("{}", render_detail(&detail, ctx.provider));
            println!("(`close` to return to the results)");
        }
        Some(FetchOutcome::Failed(failure)) => println!("⚠ {failure}"),
        None => {}
    }
}

/// Execute the browse command.
pub async fn execute(ctx: &CliContext, query: String, view: &ViewArgs) -> Result<()> {
    let state = PageState::new(query).with_page_size(view.per_page);
    let mut session = Session::new(state, view.filters());
    let mut editor = DefaultEditor::new().map_err(CliError::from)?;

    println!(
        "Browsing {}. Type `help` for commands.",
        ctx.provider.display_name()
    );
    show_page(ctx, &mut session).await;

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(CliError::from(err).into()),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line);

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match session.apply(command) {
            SessionEffect::Reload => show_page(ctx, &mut session).await,
            SessionEffect::ShowDetail => show_selected(ctx, &session).await,
            SessionEffect::ClearCache => {
                ctx.browse().clear_cache().await;
                println!("Cache cleared.");
                show_page(ctx, &mut session).await;
            }
            SessionEffect::Help => println!("{HELP}"),
            SessionEffect::Message(message) => println!("{message}"),
            SessionEffect::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use musea_core::{CatalogProvider, PaginationInfo};

    fn session() -> Session {
        Session::new(PageState::default(), FilterOptions::default())
    }

    fn rendered(current: u32, total_pages: u32) -> BrowsePage {
        BrowsePage {
            provider: CatalogProvider::Met,
            query: "bird".to_string(),
            page: current,
            page_size: 12,
            items: Vec::new(),
            pagination: PaginationInfo::from_server(u64::from(total_pages) * 12, total_pages),
            navigation: Navigation::new(current, total_pages),
            candidates: 0,
            notices: Vec::new(),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("next"), Ok(ReplCommand::Next));
        assert_eq!(parse_command("  PREV "), Ok(ReplCommand::Prev));
        assert_eq!(parse_command("page 4"), Ok(ReplCommand::Page(4)));
        assert_eq!(parse_command("size 24"), Ok(ReplCommand::Size(24)));
        assert_eq!(
            parse_command("query  great blue heron "),
            Ok(ReplCommand::Query("great blue heron".to_string()))
        );
        assert_eq!(parse_command("show 436535"), Ok(ReplCommand::Show(436_535)));
        assert_eq!(parse_command("images off"), Ok(ReplCommand::Images(false)));
        assert_eq!(parse_command("public on"), Ok(ReplCommand::Public(true)));
        assert_eq!(parse_command("clear-cache"), Ok(ReplCommand::ClearCache));
        assert_eq!(parse_command("quit"), Ok(ReplCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("page").is_err());
        assert!(parse_command("page two").is_err());
        assert!(parse_command("query").is_err());
        assert!(parse_command("images maybe").is_err());
        assert!(parse_command("teleport").is_err());
    }

    #[test]
    fn test_navigation_at_first_page_is_noop() {
        let mut session = session();
        session.record_page(&rendered(1, 3));

        assert!(matches!(
            session.apply(ReplCommand::Prev),
            SessionEffect::Message(_)
        ));
        assert!(matches!(
            session.apply(ReplCommand::First),
            SessionEffect::Message(_)
        ));
        assert_eq!(session.state().page, 1);

        assert_eq!(session.apply(ReplCommand::Next), SessionEffect::Reload);
        assert_eq!(session.state().page, 2);
    }

    #[test]
    fn test_next_at_last_page_is_noop() {
        let mut session = session();
        session.apply(ReplCommand::Page(3));
        session.record_page(&rendered(3, 3));

        assert!(matches!(
            session.apply(ReplCommand::Next),
            SessionEffect::Message(_)
        ));
        assert_eq!(session.state().page, 3);
    }

    #[test]
    fn test_page_zero_rejected() {
        let mut session = session();
        assert!(matches!(
            session.apply(ReplCommand::Page(0)),
            SessionEffect::Message(_)
        ));
        assert_eq!(session.state().page, 1);
    }

    #[test]
    fn test_query_resets_page_and_selection() {
        let mut session = session();
        session.apply(ReplCommand::Page(5));
        session.apply(ReplCommand::Show(42));

        assert_eq!(
            session.apply(ReplCommand::Query("owl".to_string())),
            SessionEffect::Reload
        );
        assert_eq!(session.state().query, "owl");
        assert_eq!(session.state().page, 1);
        assert_eq!(session.state().selected_id, None);
    }

    #[test]
    fn test_size_change() {
        let mut session = session();
        assert_eq!(session.apply(ReplCommand::Size(18)), SessionEffect::Reload);
        assert_eq!(session.state().page_size, PageSize::Eighteen);

        assert!(matches!(
            session.apply(ReplCommand::Size(10)),
            SessionEffect::Message(_)
        ));
        assert_eq!(session.state().page_size, PageSize::Eighteen);
    }

    #[test]
    fn test_show_and_close() {
        let mut session = session();
        assert!(matches!(
            session.apply(ReplCommand::Close),
            SessionEffect::Message(_)
        ));

        assert_eq!(session.apply(ReplCommand::Show(7)), SessionEffect::ShowDetail);
        assert_eq!(session.state().selected_id, Some(7));

        assert_eq!(session.apply(ReplCommand::Close), SessionEffect::Reload);
        assert_eq!(session.state().selected_id, None);
    }

    #[test]
    fn test_filter_toggles() {
        let mut session = Session::new(
            PageState::default(),
            FilterOptions::none()
                .with_require_image(true)
                .with_require_public_domain(true),
        );

        session.apply(ReplCommand::Images(false));
        session.apply(ReplCommand::Public(false));

        assert_eq!(*session.filters(), FilterOptions::none());
    }
}
