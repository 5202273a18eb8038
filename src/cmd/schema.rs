//! Schema command - print expected input formats

use super::LedgerInput;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema, csv-header or csv-fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the input format
    JsonSchema,
    /// CSV header row with column names
    CsvHeader,
    /// CSV column descriptions
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => {
                let schema = schema_for!(LedgerInput);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaFormat::CsvHeader => {
                let names: Vec<_> = CSV_FIELDS.iter().map(|(name, _)| *name).collect();
                println!("{}", names.join(","));
            }
            SchemaFormat::CsvFields => {
                println!("CSV Input Format");
                println!("================");
                println!();
                for (name, description) in CSV_FIELDS {
                    println!("{:8} (required)  {}", name, description);
                }
                println!();
                println!("Amounts are plain digits with at most one '.', no sign or separators.");
            }
        }
        Ok(())
    }
}

const CSV_FIELDS: &[(&str, &str)] = &[
    ("kind", "Target collection: income or expense"),
    ("label", "Display label, must not be blank"),
    ("amount", "Non-negative amount, e.g. 800 or 12.50"),
];
