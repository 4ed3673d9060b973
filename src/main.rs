use anyhow::Context;
use clap::{Parser, Subcommand};
use podio::{ClientOptions, CreateSpaceParams, Credentials, PodioClient};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Podio CLI - Interface de linha de comando para a API do Podio
#[derive(Parser)]
#[command(name = "podio")]
#[command(version = "0.1.0")]
#[command(about = "CLI para consultar e administrar spaces, apps e campos do Podio", long_about = None)]
struct Cli {
    /// URL base da API (ou use PODIO_API_URL)
    #[arg(long, env = "PODIO_API_URL", global = true)]
    api_url: Option<String>,

    /// User-Agent enviado em todas as requisições (ou use PODIO_USER_AGENT)
    #[arg(long, env = "PODIO_USER_AGENT", default_value = "podio-cli", global = true)]
    user_agent: String,

    /// Formato de saída (json, pretty)
    #[arg(short = 'o', long, default_value = "pretty", global = true)]
    output: OutputFormat,

    /// Modo verbose para debug
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug, PartialEq)]
enum OutputFormat {
    Json,
    Pretty,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            _ => Err(format!("Formato desconhecido: {}", s)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Mostra um space pelo ID ou pela URL completa
    Space {
        /// ID numérico ou URL (https://podio.com/org/space)
        space: String,
    },

    /// Lista os spaces de uma organização
    Spaces { org_id: String },

    /// Cria um space fechado na organização
    CreateSpace { org_id: String, name: String },

    /// Renomeia um space
    RenameSpace { space_id: String, name: String },

    /// Remove um space
    DeleteSpace { space_id: String },

    /// Mostra uma organização pelo ID ou pelo slug da URL
    Org {
        /// ID numérico ou slug (ex.: "acme")
        org: String,
    },

    /// Lista as organizações do usuário
    Orgs,

    /// Mostra um app
    App { app_id: String },

    /// Lista os apps ativos de um space
    Apps { space_id: String },

    /// Remove um app
    DeleteApp { app_id: String },

    /// Mostra um campo de um app
    Field { app_id: String, field_id: String },

    /// Remove um campo de um app
    DeleteField {
        app_id: String,
        field_id: String,

        /// Apaga também os valores gravados nos items
        #[arg(long)]
        delete_values: bool,
    },
}

/// Estrutura para resposta padronizada
#[derive(Serialize)]
struct CliResponse {
    success: bool,
    data: Option<serde_json::Value>,
    error: Option<String>,
}

impl CliResponse {
    fn success<T: Serialize>(data: &T) -> anyhow::Result<Self> {
        Ok(Self {
            success: true,
            data: Some(serde_json::to_value(data).context("falha ao serializar resposta")?),
            error: None,
        })
    }

    fn error(msg: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output_format = cli.output.clone();

    match execute_command(&cli).await {
        Ok(response) => {
            let exit_code = if response.success { 0 } else { 1 };
            output_response(response, &output_format);
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("❌ Erro: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Monta o cliente a partir do ambiente e autentica
async fn connect(cli: &Cli) -> anyhow::Result<PodioClient> {
    let mut options = ClientOptions::from_env().context("credenciais do app ausentes")?;
    if let Some(api_url) = &cli.api_url {
        options = options.with_api_url(api_url.as_str());
    }
    options = options.with_user_agent(cli.user_agent.as_str());

    let credentials = Credentials::from_env().context("credenciais do usuário ausentes")?;

    let client = PodioClient::new(options)?;
    client.authenticate(&credentials).await?;

    Ok(client)
}

async fn execute_command(cli: &Cli) -> anyhow::Result<CliResponse> {
    let client = connect(cli).await?;

    match &cli.command {
        Commands::Space { space } => {
            let result = if space.starts_with("http") {
                client.get_space_by_url(space).await
            } else {
                client.get_space(space).await
            };
            respond(result)
        }

        Commands::Spaces { org_id } => respond(client.get_spaces(org_id).await),

        Commands::CreateSpace { org_id, name } => {
            let org_id: u64 = org_id
                .parse()
                .with_context(|| format!("org_id inválido: {}", org_id))?;
            let params = CreateSpaceParams::new(org_id, name.as_str())
                .privacy("closed")
                .auto_join(false)
                .post_on_new_app(false)
                .post_on_new_member(false);
            respond(client.create_space(&params).await)
        }

        Commands::RenameSpace { space_id, name } => {
            let params = CreateSpaceParams::rename(name.as_str());
            respond(client.update_space(space_id, &params).await)
        }

        Commands::DeleteSpace { space_id } => {
            respond(client.delete_space(space_id).await.map(|_| deleted(space_id)))
        }

        Commands::Org { org } => {
            let result = if org.parse::<u64>().is_ok() {
                client.get_organization(org).await
            } else {
                client.get_organization_by_slug(org).await
            };
            respond(result)
        }

        Commands::Orgs => respond(client.get_organizations().await),

        Commands::App { app_id } => respond(client.get_application(app_id).await),

        Commands::Apps { space_id } => respond(client.get_applications(space_id).await),

        Commands::DeleteApp { app_id } => {
            respond(client.delete_application(app_id).await.map(|_| deleted(app_id)))
        }

        Commands::Field { app_id, field_id } => respond(client.get_field(app_id, field_id).await),

        Commands::DeleteField {
            app_id,
            field_id,
            delete_values,
        } => respond(
            client
                .delete_field(app_id, field_id, *delete_values)
                .await
                .map(|_| deleted(field_id)),
        ),
    }
}

fn deleted(id: &str) -> serde_json::Value {
    serde_json::json!({ "deleted": id })
}

/// Converte o resultado da API em resposta da CLI
fn respond<T: Serialize>(result: podio::PodioResult<T>) -> anyhow::Result<CliResponse> {
    match result {
        Ok(data) => CliResponse::success(&data),
        Err(e) => Ok(CliResponse::error(e.to_string())),
    }
}

fn output_response(response: CliResponse, format: &OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string(&response) {
            Ok(line) => println!("{}", line),
            Err(e) => eprintln!("❌ Erro: {}", e),
        },
        OutputFormat::Pretty => {
            if response.success {
                if let Some(data) = response.data {
                    println!("✅ Sucesso!");
                    match serde_json::to_string_pretty(&data) {
                        Ok(text) => println!("{}", text),
                        Err(e) => eprintln!("❌ Erro: {}", e),
                    }
                }
            } else if let Some(error) = response.error {
                eprintln!("❌ Erro: {}", error);
            }
        }
    }
}
