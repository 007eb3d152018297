use scenestitch::app;
use scenestitch::cli::{parse_args, Command};
use scenestitch::config::AppConfig;
use scenestitch::serve::serve_lines;
use scenestitch::AppError;
use tokio::io::BufReader;

async fn run(command: Command) -> Result<(), AppError> {
    if command == Command::Examples {
        print!("{}", app::render_catalog());
        return Ok(());
    }

    let config = AppConfig::from_env()?;
    let generator = app::build_generator(&config.generator)?;
    let harness = app::build_harness(&config, generator);

    match command {
        Command::Generate { image, prompt } => {
            let artifact = app::generate_from_file(&harness, &image, &prompt).await?;
            println!("{}", artifact.path.display());
        }
        Command::Example { number } => {
            let artifact = app::run_example(&harness, &config.examples_dir, number).await?;
            println!("{}", artifact.path.display());
        }
        Command::Serve => {
            let served = serve_lines(&harness, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
            log::info!("serve:eof served={served}");
        }
        Command::Examples => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match parse_args(&args) {
        Ok(command) => run(command).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        eprintln!("[scenestitch] {e}");
        std::process::exit(e.exit_code());
    }
}
