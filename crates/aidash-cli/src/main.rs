use std::net::SocketAddr;

use aidash_client::{ApiClient, Dashboard};
use aidash_core::{
    CertificationTables, DashboardQuery, DetailFilters, MaturityFilter, QueryType, Role,
};
use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod display;

#[derive(Parser)]
#[command(name = "aidash")]
#[command(about = "AI certification and appointment dashboard", long_about = None)]
struct Cli {
    /// API root of the statistics backend
    #[arg(
        long,
        global = true,
        env = "AIDASH_BASE_URL",
        default_value = "http://127.0.0.1:3000/ai_transform_webapi"
    )]
    base_url: String,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the certification dashboard for a department and role
    Dashboard {
        #[arg(long, default_value = "0")]
        dept: String,
        /// 0 all, 1 cadre, 2 expert, 3 frontline manager
        #[arg(long, default_value = "0")]
        role: Role,
    },
    /// List the department tree, role and maturity options
    Filters,
    /// Employee drill-down behind a table cell
    Details {
        #[arg(long, default_value = "0")]
        dept: String,
        /// L1, L2, L3, L5 (L2 and L3) or empty for all
        #[arg(long, default_value = "")]
        maturity: MaturityFilter,
        #[arg(long)]
        job_category: Option<String>,
        #[arg(long, default_value = "1")]
        person_type: Role,
        /// 1 appointed, 2 baseline
        #[arg(long, default_value_t = 1)]
        query_type: i64,
    },
    /// Entry-level manager (PL/TM and PM) certification table
    Managers,
    /// Cadre AI certification overview by department
    CadreOverview,
    /// Personal AI course completion by level
    Courses {
        /// Employee number; the backend's session user when omitted
        #[arg(long)]
        account: Option<String>,
    },
    /// Static all-staff appointment and certification trends
    Trends,
    /// Run the mock backend
    ServeMock {
        #[arg(long, env = "AIDASH_MOCK_ADDR", default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

/// Print `value` as pretty JSON or through its text renderer.
fn emit<T: Serialize>(
    json: bool,
    value: &T,
    render: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(value).context("serialising output")?;
        println!("{text}");
    } else {
        print!("{}", render(value));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Cli {
        base_url,
        json,
        command,
    } = Cli::parse();
    tracing::debug!("aidash v{}", env!("CARGO_PKG_VERSION"));

    let dashboard = || Dashboard::with_fresh_cache(ApiClient::http(base_url.clone()));
    match command {
        Commands::Dashboard { dept, role } => {
            let query = DashboardQuery {
                dept_code: dept,
                role,
            };
            let view = dashboard()
                .certification(&query, &CertificationTables::default())
                .await;
            emit(json, &view, display::render_dashboard)?;
        }
        Commands::Filters => {
            let options = dashboard().filter_options().await;
            emit(json, &options, display::render_filters)?;
        }
        Commands::Details {
            dept,
            maturity,
            job_category,
            person_type,
            query_type,
        } => {
            let query_type = QueryType::from_code(query_type)
                .ok_or_else(|| anyhow!("query type must be 1 (appointed) or 2 (baseline)"))?;
            let filters = DetailFilters {
                dept_code: dept,
                maturity,
                job_category,
                person_type,
                query_type,
            };
            let view = dashboard().qualified_details(&filters).await;
            emit(json, &view, display::render_details)?;
        }
        Commands::Managers => {
            let rows = dashboard().entry_level_managers().await;
            emit(json, &rows, |rows| display::render_managers(rows))?;
        }
        Commands::CadreOverview => {
            let rows = dashboard().cadre_ai_overview().await;
            emit(json, &rows, |rows| display::render_cadre_overview(rows))?;
        }
        Commands::Courses { account } => {
            let completion = dashboard()
                .personal_courses(account.as_deref())
                .await
                .context("loading personal course completion")?;
            emit(json, &completion, display::render_courses)?;
        }
        Commands::Trends => {
            let trends = dashboard().overall_trends().await;
            emit(json, &trends, display::render_trends)?;
        }
        Commands::ServeMock { addr } => {
            let listener = TcpListener::bind(addr)
                .await
                .with_context(|| format!("binding mock backend to {addr}"))?;
            aidash_mock::serve(listener)
                .await
                .context("mock backend stopped")?;
        }
    }
    Ok(())
}
