//! uml-modelling-cli binary
//!
//! Converts a class model XML file into the metadata list (`meta.json`) and
//! the document template (`config.xml`).

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use uml_modelling_sdk::export::{DocumentExporter, MetaExporter};
use uml_modelling_sdk::model::{ModelLoader, ModelSaver};
use uml_modelling_sdk::model::saver::{DOCUMENT_FILE, META_FILE};
use uml_modelling_sdk::storage::filesystem::FileSystemStorageBackend;

#[derive(Parser, Debug)]
#[command(
    name = "uml-modelling-cli",
    about = "Convert a UML class model XML file into metadata and document-template artifacts"
)]
struct Args {
    /// Input class model XML file
    input: String,

    /// Output directory for the generated artifacts
    #[arg(short, long, default_value = "out")]
    out_dir: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let loader = ModelLoader::new(FileSystemStorageBackend::new("."));
    let model = loader.load_model(&args.input).await?;

    let meta = MetaExporter::new().export(&model)?;
    let document = DocumentExporter::new().export(&model)?;

    let saver = ModelSaver::new(FileSystemStorageBackend::new("."));
    saver.save_artifacts(&args.out_dir, &meta, &document).await?;

    println!(
        "Generated {}/{} and {}/{}",
        args.out_dir, META_FILE, args.out_dir, DOCUMENT_FILE
    );
    Ok(())
}
