//! Link commands: shorten, resolve, stats

use colored::Colorize;

use crate::api::ShortUrlBuilder;
use crate::interfaces::cli::CliError;
use crate::services::LinkService;
use crate::utils::validate_url;

pub async fn shorten_url(
    service: &LinkService,
    url_builder: &ShortUrlBuilder,
    url: &str,
) -> Result<(), CliError> {
    validate_url(url).map_err(|e| CliError::ParseError(e.to_string()))?;

    let result = service.create_short_link(url.trim()).await?;

    if result.created {
        println!(
            "{} Added short link: {} -> {}",
            "✓".bold().green(),
            result.link.code.cyan(),
            result.link.target.blue().underline()
        );
    } else {
        println!(
            "{} Existing short link: {} -> {}",
            "ℹ".bold().blue(),
            result.link.code.cyan(),
            result.link.target.blue().underline()
        );
    }
    println!("  {}: {}", "Short URL".cyan(), url_builder.build(&result.link.code));

    Ok(())
}

pub async fn resolve_key(service: &LinkService, key: &str) -> Result<(), CliError> {
    let target = service.resolve_short_link(key).await?;
    println!("{}", target);
    Ok(())
}

pub async fn show_stats(service: &LinkService) -> Result<(), CliError> {
    let count = service.count().await?;
    println!("{}", "Store Status".bold().green());
    println!("  {}:     {}", "Backend".cyan(), service.backend_name());
    println!("  {}: {}", "Links count".cyan(), count);
    println!(
        "  {}:  {}",
        "Next length".cyan(),
        crate::keygen::select_length(count)
    );
    Ok(())
}
