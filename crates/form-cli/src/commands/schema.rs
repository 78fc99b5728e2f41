use anyhow::Result;
use colored::Colorize;
use form_engine::shared_signup_schema;

pub fn execute() -> Result<()> {
    let schema = shared_signup_schema();

    println!("{}", "Signup schema".green().bold());
    println!();

    for (field, chain) in schema.iter() {
        println!("{} {}", field.to_string().cyan().bold(), format!("({})", field.shape()).dimmed());
        if chain.is_empty() {
            println!("  {}", "no rules".dimmed());
        }
        for rule in chain {
            println!(
                "  {:<12} {:<40} {}",
                rule.kind().to_string().yellow(),
                rule.check().to_string(),
                rule.message()
            );
        }
    }

    Ok(())
}
