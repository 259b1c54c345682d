//! Implementation of the `fabrik list` command.

use fabrik_core::application::{CatalogService, ProductInfo};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let products = CatalogService::new().list();

    match args.format {
        ListFormat::Table => {
            output.header("Available Products:")?;
            for line in table_rows(&products) {
                output.print(&line)?;
            }
        }
        // JSON must stay parseable even when piped, so it skips the quiet filter.
        ListFormat::Json => output.json(&products)?,
        ListFormat::List => {
            for p in &products {
                output.print(p.name)?;
            }
        }
        ListFormat::Csv => {
            output.print("family,name,parameters")?;
            for p in &products {
                output.print(&format!("{},{},{}", p.family, p.name, p.parameters.join(" ")))?;
            }
        }
    }

    Ok(())
}

fn table_rows(products: &[ProductInfo]) -> Vec<String> {
    products
        .iter()
        .map(|p| {
            format!(
                "  {:<9} {:<10} {}",
                p.family,
                p.name,
                p.parameters.join(", ")
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_align_columns() {
        let rows = table_rows(&CatalogService::new().list());
        assert!(rows[0].starts_with("  computer  PC         ram, hdd, cpu"));
        assert!(rows.iter().any(|r| r.contains("rectangle  width, height")));
    }
}
