//! Tests against a real external processor
//!
//! These are skipped when `xsltproc` is not installed.

mod common;

use common::{data_rows, BROKEN_TEMPLATE, CATALOG_SOURCE, CATALOG_TEMPLATE};
use xslt_playground::transform::command::program_available;
use xslt_playground::{
    CommandEngine, EngineConfig, ErrorKind, Parameter, ParameterList, TransformPipeline,
};

fn pipeline() -> Option<TransformPipeline<CommandEngine>> {
    if !program_available("xsltproc") {
        eprintln!("xsltproc not found, skipping");
        return None;
    }
    let config = if program_available("xmllint") {
        EngineConfig::default()
    } else {
        EngineConfig::default().without_checker()
    };
    Some(TransformPipeline::new(CommandEngine::new(config)))
}

#[test]
fn test_xsltproc_catalog() {
    let Some(pipeline) = pipeline() else { return };
    let params: ParameterList = vec![Parameter::new("heading", "Jukebox")].into();
    let result = pipeline.transform(CATALOG_TEMPLATE, CATALOG_SOURCE, &params);
    assert!(result.is_ok(), "unexpected error: {:?}", result.error);
    assert!(result
        .output
        .starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(result.output.contains("Jukebox"));

    let titles: Vec<String> = data_rows(&result.output)
        .into_iter()
        .map(|(title, _)| title)
        .collect();
    assert_eq!(
        titles,
        vec!["Empire Burlesque", "Hide your heart", "Greatest Hits"]
    );
}

#[test]
fn test_xsltproc_rejects_broken_template() {
    let Some(pipeline) = pipeline() else { return };
    let result = pipeline.transform(BROKEN_TEMPLATE, CATALOG_SOURCE, &ParameterList::new());
    let error = result.error.expect("broken template should fail");
    // Without a checker the processor itself reports the problem
    assert!(matches!(
        error.kind,
        ErrorKind::Parse(_) | ErrorKind::Execution
    ));
    assert_eq!(result.output, "");
}
