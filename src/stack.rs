use crate::{
    catalog::CatalogEntry,
    config::Settings,
    error::Result,
    instance::Instance,
    materialize::{materialize, GenerationRequest, Launcher},
    prompt::{self, Console},
};

/// Collects the entry's configuration, renders it and writes it to disk.
///
/// Returns `Ok(None)` when the user declines the configuration summary, in
/// which case nothing is written.
///
/// # Errors
///
/// Returns [`crate::Error::Interrupted`] if a prompt was aborted, before
/// anything is written, or the first filesystem error hit while writing the
/// stack.
pub fn create(
    entry: &'static CatalogEntry,
    settings: &Settings,
    console: &mut impl Console,
    launcher: &impl Launcher,
) -> Result<Option<Vec<String>>> {
    let variables = prompt::collect_variables(console, entry.variables)?;
    let ports = prompt::collect_ports(console, entry.ports)?;

    if !prompt::confirm(console, &variables, &ports)? {
        crate::info!("Configuration not confirmed, nothing was written");
        return Ok(None);
    }

    let auto_start = prompt::confirm_auto_start(console)?;

    let instance = Instance::from_entry(entry)
        .substitute_variables(&variables)
        .substitute_ports(&ports);

    let root = settings.stack_root(entry);
    let request = GenerationRequest::builder()
        .display_root(settings.display_path(&root))
        .entry(entry)
        .instance(instance)
        .root(root)
        .auto_start(auto_start)
        .build()?;

    materialize(&request, launcher).map(Some)
}
