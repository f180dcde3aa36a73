//! hats_domains library: reconnaissance over the `{n}hats.com` domain family
//!
//! This library enumerates candidate domains, checks each one's WHOIS
//! registration and DNS, loads live sites in a headless browser for a title and
//! screenshot, and renders everything into one self-contained HTML report.
//!
//! # Example
//!
//! ```no_run
//! use hats_domains::{run_report, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     largest: 10,
//!     path: PathBuf::from("hats.html"),
//!     ..Default::default()
//! };
//!
//! let report = run_report(config).await?;
//! println!("Checked {} domains: {} available, {} failed",
//!          report.total_domains, report.available, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime and a WebDriver server binary
//! (geckodriver by default) at `Config::driver_path`.

mod app;
pub mod browser;
pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod inspect;
pub mod models;
pub mod report;
pub mod serve;
pub mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use domain::enumerate_domains;
pub use inspect::Inspector;
pub use report::{render_report, render_report_to_string};
pub use run::{run_report, serve_inspector, RunReport};

// Internal run module (contains the pipeline wiring)
mod run {
    use std::fs::File;
    use std::future::Future;
    use std::io::{BufWriter, Write};
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use log::{info, warn};
    use tokio::net::TcpListener;
    use tokio::sync::Mutex;

    use crate::app::{print_error_statistics, print_run_summary, shutdown_signal};
    use crate::browser::{Browser, DriverService, WebDriverSession};
    use crate::config::Config;
    use crate::dns::{DnsResolver, HostResolver};
    use crate::domain::enumerate_domains;
    use crate::error_handling::ProcessingStats;
    use crate::initialization::{init_driver_client, init_resolver};
    use crate::inspect::Inspector;
    use crate::models::SiteResult;
    use crate::report::{render_report, render_report_to_string};
    use crate::serve::{self, RefreshFuture, Refresher, ReportState};
    use crate::whois::{WhoisClient, WhoisLookup};

    type LiveInspector = Inspector<WhoisClient, DnsResolver, WebDriverSession>;

    /// Results of one pass over the domains.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of domains inspected
        pub total_domains: usize,
        /// Domains WHOIS reported as unregistered
        pub available: usize,
        /// Domains whose processing ended with an error
        pub failed: usize,
        /// Where the report was written (`None` in serve mode)
        pub output: Option<PathBuf>,
        /// Elapsed time of the inspection pass in seconds
        pub elapsed_seconds: f64,
    }

    impl RunReport {
        fn from_sites(sites: &[SiteResult], output: Option<PathBuf>, elapsed_seconds: f64) -> Self {
            RunReport {
                total_domains: sites.len(),
                available: sites.iter().filter(|s| s.is_available()).count(),
                failed: sites.iter().filter(|s| s.error.is_some()).count(),
                output,
                elapsed_seconds,
            }
        }
    }

    /// Where the rendered report goes.
    enum Output {
        File(File),
        Server(TcpListener),
    }

    /// Runs the pipeline with the provided configuration.
    ///
    /// In file mode the report is written to `config.path` and the function
    /// returns when it is done. In serve mode the report is served on
    /// `127.0.0.1:config.port` until Ctrl-C, and the returned report describes
    /// the first pass.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration is invalid
    /// - The output file cannot be created, or the serve port cannot be bound
    /// - The WHOIS client, browser driver or browser session cannot be started
    /// - The report cannot be rendered or written
    ///
    /// Per-domain failures are never errors here; they end up in the report.
    pub async fn run_report(config: Config) -> Result<RunReport> {
        config.validate()?;
        let timeout = Duration::from_secs(config.timeout_seconds);
        let domains = enumerate_domains(config.largest, config.include_special);
        info!("Checking {} domains", domains.len());

        // Claim the output before any slow work starts.
        let output = if config.serve {
            Output::Server(serve::bind(config.port).await?)
        } else {
            let file = File::create(&config.path)
                .with_context(|| format!("Failed to create {}", config.path.display()))?;
            Output::File(file)
        };

        let client = init_driver_client(timeout).context("Failed to initialize HTTP client")?;
        let driver = DriverService::start(&config.driver_path, config.driver_port, config.debug, &client)
            .await
            .context("Failed to start browser driver")?;
        let session = match WebDriverSession::start(driver.base_url(), timeout).await {
            Ok(session) => session,
            Err(e) => {
                driver.stop().await;
                return Err(e).context("Failed to start browser session");
            }
        };

        let whois = match WhoisClient::new(timeout).await {
            Ok(whois) => whois,
            Err(e) => {
                close_session(session).await;
                driver.stop().await;
                return Err(e.into());
            }
        };

        let inspector = Inspector::new(whois, init_resolver(timeout), session);

        let result = match output {
            Output::File(file) => write_report(inspector, &domains, file, config.path).await,
            Output::Server(listener) => {
                let (served, session) =
                    serve_inspector(inspector, domains, listener, shutdown_signal()).await;
                match session {
                    Some(session) => close_session(session).await,
                    None => warn!("Browser session still shared at shutdown; leaving it to the driver"),
                }
                served
            }
        };

        driver.stop().await;
        result
    }

    /// One inspection pass with fresh statistics.
    async fn inspect_pass<W, R, B>(
        inspector: &mut Inspector<W, R, B>,
        domains: &[String],
    ) -> (Vec<SiteResult>, f64)
    where
        W: WhoisLookup,
        R: HostResolver,
        B: Browser,
    {
        let stats = ProcessingStats::new();
        let start = Instant::now();
        let sites = inspector.inspect_all(domains, &stats).await;
        let elapsed_seconds = start.elapsed().as_secs_f64();

        print_error_statistics(&stats);
        print_run_summary(&sites, elapsed_seconds);
        (sites, elapsed_seconds)
    }

    async fn write_report(
        mut inspector: LiveInspector,
        domains: &[String],
        file: File,
        path: PathBuf,
    ) -> Result<RunReport> {
        let (sites, elapsed_seconds) = inspect_pass(&mut inspector, domains).await;
        close_session(inspector.into_browser()).await;

        let mut writer = BufWriter::new(file);
        render_report(&sites, &mut writer).context("Failed to render report")?;
        writer
            .flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Report written to {}", path.display());

        Ok(RunReport::from_sites(&sites, Some(path), elapsed_seconds))
    }

    /// Inspects `domains` once, then serves the report on `listener` until
    /// `shutdown` resolves. Every `POST /refresh` runs a fresh pass with the
    /// same inspector.
    ///
    /// Returns the report for the first pass together with the browser, handed
    /// back once the server has stopped so its session can be closed. The
    /// browser is `None` only if a refresh was still holding it.
    pub async fn serve_inspector<W, R, B, F>(
        inspector: Inspector<W, R, B>,
        domains: Vec<String>,
        listener: TcpListener,
        shutdown: F,
    ) -> (Result<RunReport>, Option<B>)
    where
        W: WhoisLookup + Send + 'static,
        R: HostResolver + Send + 'static,
        B: Browser + Send + 'static,
        F: Future<Output = ()> + Send + 'static,
    {
        let inspector = Arc::new(Mutex::new(inspector));
        let domains = Arc::new(domains);

        let first = {
            let mut guard = inspector.lock().await;
            let (sites, elapsed_seconds) = inspect_pass(&mut guard, &domains).await;
            render_report_to_string(&sites)
                .context("Failed to render report")
                .map(|html| (html, RunReport::from_sites(&sites, None, elapsed_seconds)))
        };

        let served = match first {
            Ok((html, report)) => {
                let refresh = refresher(Arc::clone(&inspector), Arc::clone(&domains));
                serve::serve_report(listener, ReportState::new(html, refresh), shutdown)
                    .await
                    .map(|()| report)
            }
            Err(e) => Err(e),
        };

        // The router and its refresher are gone once the server returns.
        let browser = Arc::try_unwrap(inspector)
            .ok()
            .map(|inspector| inspector.into_inner().into_browser());
        (served, browser)
    }

    fn refresher<W, R, B>(inspector: Arc<Mutex<Inspector<W, R, B>>>, domains: Arc<Vec<String>>) -> Refresher
    where
        W: WhoisLookup + Send + 'static,
        R: HostResolver + Send + 'static,
        B: Browser + Send + 'static,
    {
        Arc::new(move || -> RefreshFuture {
            let inspector = Arc::clone(&inspector);
            let domains = Arc::clone(&domains);
            Box::pin(async move {
                let mut guard = inspector.lock().await;
                let (sites, _) = inspect_pass(&mut guard, &domains).await;
                render_report_to_string(&sites).context("Failed to render report")
            })
        })
    }

    async fn close_session(session: WebDriverSession) {
        if let Err(e) = session.quit().await {
            warn!("Failed to close browser session: {}", e);
        }
    }
}
