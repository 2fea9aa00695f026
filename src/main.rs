use clap::Parser;
use marathon_consul::utils::error::ErrorCategory;
use marathon_consul::utils::{logger, validation::Validate};
use marathon_consul::{
    AppId, CliConfig, Command, Marathon, MarathonError, RegistrationIntent, TaskId,
};
use serde::Serialize;

/// One output line of the `intents` command.
#[derive(Debug, Serialize)]
struct TaskIntent<'a> {
    app_id: &'a AppId,
    task_id: &'a TaskId,
    host: &'a str,
    healthy: bool,
    #[serde(flatten)]
    intent: RegistrationIntent,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_json);
    tracing::debug!("CLI config: {:?}", cli.command);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = run(&cli.command, config.marathon, &config.consul.name_separator).await {
        exit_with(e);
    }
    Ok(())
}

async fn run(
    command: &Command,
    marathon: marathon_consul::MarathonConfig,
    separator: &str,
) -> marathon_consul::Result<()> {
    let client = Marathon::new(marathon)?;

    match command {
        Command::Leader => {
            println!("{}", client.leader().await?);
        }
        Command::Apps => {
            for app in client.consul_apps().await? {
                println!("{}", app.id);
            }
        }
        Command::Intents { healthy_only } => {
            let apps = client.consul_apps().await?;
            tracing::info!("Deriving registration intents for {} apps", apps.len());

            for app in apps.iter().filter(|app| app.is_consul_app()) {
                for task in app.tasks_for_registration() {
                    let healthy = task.is_healthy();
                    if *healthy_only && !healthy {
                        tracing::debug!("Skipping unhealthy task {}", task.id);
                        continue;
                    }
                    let line = TaskIntent {
                        app_id: &app.id,
                        task_id: &task.id,
                        host: &task.host,
                        healthy,
                        intent: app.registration_intent(task, separator),
                    };
                    let json =
                        serde_json::to_string(&line).map_err(MarathonError::SerializationError)?;
                    println!("{}", json);
                }
            }
        }
    }
    Ok(())
}

fn exit_with(e: MarathonError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.category() {
        ErrorCategory::HttpStatus | ErrorCategory::Decode => 1,
        ErrorCategory::Configuration => 2,
        ErrorCategory::Network => 3,
        ErrorCategory::Output => 4,
    };
    std::process::exit(exit_code);
}
