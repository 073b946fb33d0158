fn main() {
    // The embedded defaults back `expect` calls in the lazy singletons, so a
    // broken file must fail the build rather than the first lookup.
    require_tables(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
        &["analysis", "display"],
    );
    require_tables(
        "src/kana/default_kana.toml",
        include_str!("src/kana/default_kana.toml"),
        &["plain", "voiced", "combo"],
    );
}

fn require_tables(path: &str, content: &str, names: &[&str]) {
    let doc: toml::Table = match content.parse() {
        Ok(doc) => doc,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    for name in names {
        if !doc.get(*name).is_some_and(toml::Value::is_table) {
            panic!("{path} is missing the [{name}] table");
        }
    }
}
