use crate::config::Config;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::hn::HackerNews;
use crate::logger;
use crate::state::{SearchTerm, State};
use crate::storage::{FileStore, QueryStore, SEARCH_TERM_KEY};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. A
    /// query given on the command line replaces the persisted search term.
    /// Returns the result of the application execution.
    ///
    pub async fn start(
        config: Config,
        cli_query: Option<String>,
        log_level: LevelFilter,
    ) -> Result<()> {
        let log_buffer = logger::init(log_level)?;

        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let search_term = App::open_search_term(&config, cli_query.as_deref())?;
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', expected one of: {}.",
                config.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });

        let app = App {
            state: Arc::new(Mutex::new(State::new(
                tx,
                search_term,
                log_buffer,
                theme,
            ))),
            config,
        };
        app.start_network(rx)?;
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Open the persisted search term, applying the command line override.
    ///
    fn open_search_term(config: &Config, cli_query: Option<&str>) -> Result<SearchTerm> {
        let store = FileStore::open_or_empty(&config.storage_path()?);
        let mut search_term: SearchTerm =
            QueryStore::open(Box::new(store), SEARCH_TERM_KEY, &config.default_query);
        if let Some(query) = cli_query {
            search_term.set(query);
        }
        debug!("Initial search term is '{}'.", search_term.get());
        Ok(search_term)
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> Result<()> {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        let hn = HackerNews::new(&self.config.api_base_url)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        std::thread::spawn(move || {
            runtime.block_on(async {
                let mut network_event_handler = NetworkEventHandler::new(&cloned_state, &hn);
                while let Ok(network_event) = net_receiver.recv() {
                    if let Err(e) = network_event_handler.handle(network_event).await {
                        error!("Failed to handle network event: {}", e);
                    }
                }
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        let result = self.run(&mut terminal).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Draw frames and handle terminal events until exit is requested.
    ///
    async fn run(&self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        self.state.lock().await.search();

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
