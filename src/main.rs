use clap::{Parser, ValueEnum};
use interview_prep::{api::ApiClient, backend::Backend, catalog::Catalog, AppState};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Source {
    /// Bundled sample questions, submissions are only logged.
    Mock,
    /// The external HTTP backend at `--api-url`.
    Api,
}

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:3000")]
    address: String,

    /// Where questions, contributions and sign-ins go.
    #[arg(long, env, value_enum, default_value_t = Source::Mock)]
    source: Source,

    /// Base URL of the external backend, used with `--source api`.
    #[arg(long, env, default_value = interview_prep::api::DEFAULT_BASE_URL)]
    api_url: String,

    /// Mark the auth cookie `Secure` (serve over HTTPS).
    #[arg(long, env, default_value_t = false)]
    secure_cookies: bool,

    /// Password accepted by the sample backend's sign-in.
    #[arg(long, env, default_value = "interview")]
    shared_password: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=debug,interview_prep=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let backend = match args.source {
        Source::Mock => Backend::Sample(Catalog::sample(&args.shared_password)?),
        Source::Api => Backend::Remote(ApiClient::new(args.api_url)),
    };
    tracing::info!("serving questions from {}", backend.describe());

    let app = interview_prep::router(AppState::new(backend, args.secure_cookies));

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on http://{address}");
    axum::serve(listener, app).await?;

    Ok(())
}
