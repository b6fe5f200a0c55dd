use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use refcard_lib::{DEFAULT_PARSER_KEY, ParserRegistry};

pub(crate) fn run_list(registry: &ParserRegistry) {
    log::info!(
        "{}",
        "Available parsers:".if_supports_color(Stdout, |t| t.bold())
    );
    crate::log_blank();

    for info in registry.list() {
        log::info!(
            "  {} [{}]{}",
            info.key.if_supports_color(Stdout, |t| t.bold()),
            info.name.if_supports_color(Stdout, |t| t.cyan()),
            if info.key == DEFAULT_PARSER_KEY {
                format!(" {}", "(default)".if_supports_color(Stdout, |t| t.green()))
            } else {
                String::new()
            },
        );
        if !info.description.is_empty() {
            log::info!("    {}", info.description);
        }
    }

    let aliases: Vec<String> = registry
        .aliases()
        .map(|(alias, key)| format!("{alias} -> {key}"))
        .collect();
    if !aliases.is_empty() {
        crate::log_blank();
        log::info!("Aliases: {}", aliases.join(", "));
    }
}
