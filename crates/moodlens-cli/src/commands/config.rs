use anyhow::{Context, Result};
use moodlens_core::secret::SecretService;
use moodlens_infrastructure::{ConfigService, SecretServiceImpl};

pub fn path() -> Result<()> {
    let config_service = ConfigService::new()?;
    println!("{}", config_service.path().display());
    Ok(())
}

pub async fn show() -> Result<()> {
    let config_service = ConfigService::new()?;
    let config = config_service
        .get_config()
        .with_context(|| format!("Failed to load {}", config_service.path().display()))?;

    let secret_service = SecretServiceImpl::new(None)?;
    let secret_state = if secret_service.secret_file_exists().await {
        "present"
    } else {
        "missing"
    };

    println!("# {}", config_service.path().display());
    println!("# secret.json: {}", secret_state);
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

pub fn init() -> Result<()> {
    let config_path = ConfigService::new()?.ensure_config_file()?;
    let secret_path = SecretServiceImpl::new(None)?.ensure_secret_file()?;

    println!("Config:  {}", config_path.display());
    println!("Secrets: {}", secret_path.display());
    Ok(())
}
