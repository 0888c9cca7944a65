//! Placeholder substitution over a copy of a catalog entry's templates.
//!
//! Substitution is a plain literal replace with no escaping: a resolved
//! value that itself looks like `{{SOMETHING}}` is left in place and may be
//! replaced again if a later pass declares `SOMETHING`. Variable tokens
//! (`{{NAME}}`) and port tokens (`{{PORT_NAME}}`) never overlap, so the two
//! passes give the same result in either order.

use std::collections::BTreeMap;

use crate::{catalog::CatalogEntry, values::Values};

#[must_use]
pub fn variable_token(name: &str) -> String {
    format!("{{{{{name}}}}}")
}

#[must_use]
pub fn port_token(service: &str) -> String {
    format!("{{{{PORT_{}}}}}", service.to_uppercase())
}

/// Rendered files of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Instance {
    pub files: Vec<(String, String)>,
    /// Label or service to host port, shown as access URLs.
    pub display_ports: BTreeMap<String, String>,
}

impl Instance {
    /// Copies the entry's templates, the entry itself is never modified.
    #[must_use]
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Instance {
            files: entry
                .files
                .iter()
                .map(|&(path, text)| (path.to_owned(), text.to_owned()))
                .collect(),
            display_ports: entry
                .fixed_ports
                .iter()
                .map(|&(label, port)| (label.to_owned(), port.to_owned()))
                .collect(),
        }
    }

    #[must_use]
    pub fn substitute_variables(mut self, values: &Values) -> Self {
        if values.is_empty() {
            return self;
        }

        for (name, value) in values.iter() {
            self.replace_all(&variable_token(name), value);
        }

        self
    }

    #[must_use]
    pub fn substitute_ports(mut self, ports: &Values) -> Self {
        if ports.is_empty() {
            return self;
        }

        for (service, port) in ports.iter() {
            self.replace_all(&port_token(service), port);
            self.display_ports.insert(service.to_owned(), port.to_owned());
        }

        self
    }

    fn replace_all(&mut self, token: &str, value: &str) {
        for (path, contents) in &mut self.files {
            if contents.contains(token) {
                crate::trace!("Replacing {token} in {path}");
                *contents = contents.replace(token, value);
            }
        }
    }

    #[must_use]
    pub fn file(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, contents)| contents.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    fn instance(files: &[(&str, &str)]) -> Instance {
        Instance {
            files: files
                .iter()
                .map(|&(p, c)| (p.to_owned(), c.to_owned()))
                .collect(),
            display_ports: BTreeMap::new(),
        }
    }

    #[test]
    fn tokens() {
        assert_eq!(variable_token("MYSQL_USER"), "{{MYSQL_USER}}");
        assert_eq!(port_token("phpmyadmin"), "{{PORT_PHPMYADMIN}}");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let rendered = instance(&[
            ("a.yml", "db: {{MYSQL_DATABASE}}\nbackup: {{MYSQL_DATABASE}}.sql"),
            ("b.md", "# {{MYSQL_DATABASE}}"),
        ])
        .substitute_variables(&Values::from([("MYSQL_DATABASE", "mydb")]));

        assert_eq!(rendered.file("a.yml"), Some("db: mydb\nbackup: mydb.sql"));
        assert_eq!(rendered.file("b.md"), Some("# mydb"));
        assert!(rendered.files.iter().all(|(_, c)| !c.contains("{{MYSQL_DATABASE}}")));
    }

    #[test]
    fn names_are_case_sensitive() {
        let rendered = instance(&[("a", "{{user}} {{USER}}")])
            .substitute_variables(&Values::from([("USER", "bob")]));

        assert_eq!(rendered.file("a"), Some("{{user}} bob"));
    }

    #[test]
    fn ports_use_uppercased_service_and_fill_display() {
        let rendered = instance(&[("compose", "- \"{{PORT_WEB}}:80\"")])
            .substitute_ports(&Values::from([("web", "9000")]));

        assert_eq!(rendered.file("compose"), Some("- \"9000:80\""));
        assert_eq!(rendered.display_ports.get("web").map(String::as_str), Some("9000"));
    }

    #[test]
    fn empty_values_are_a_no_op() {
        let original = instance(&[("a", "{{X}} {{PORT_Y}}")]);
        let rendered = original
            .clone()
            .substitute_variables(&Values::default())
            .substitute_ports(&Values::default());

        assert_eq!(rendered, original);
    }

    #[test]
    fn pass_order_does_not_matter() {
        let entry = registry::resolve("lamp").unwrap();
        let vars = Values::from([
            ("MYSQL_ROOT_PASSWORD", "r00t"),
            ("MYSQL_DATABASE", "shop"),
            ("MYSQL_USER", "alice"),
            ("MYSQL_PASSWORD", "hunter22"),
        ]);
        let ports = Values::from([("web", "80"), ("mysql", "3307"), ("phpmyadmin", "8888")]);

        let forward = Instance::from_entry(entry)
            .substitute_variables(&vars)
            .substitute_ports(&ports);
        let backward = Instance::from_entry(entry)
            .substitute_ports(&ports)
            .substitute_variables(&vars);

        assert_eq!(forward, backward);
    }

    #[test]
    fn entry_templates_are_not_touched() {
        let entry = registry::resolve("mariadb").unwrap();
        let _ = Instance::from_entry(entry)
            .substitute_variables(&Values::from([("MYSQL_DATABASE", "first")]));
        let second = Instance::from_entry(entry);

        assert!(second
            .file("docker-compose.yml")
            .is_some_and(|c| c.contains("{{MYSQL_DATABASE}}")));
    }

    #[test]
    fn value_containing_a_later_token_is_expanded() {
        let rendered = instance(&[("a", "{{FIRST}}")])
            .substitute_variables(&Values::from([("FIRST", "{{SECOND}}"), ("SECOND", "x")]));

        assert_eq!(rendered.file("a"), Some("x"));
    }

    #[test]
    fn fixed_ports_seed_the_display_map() {
        let entry = registry::resolve("obs").unwrap();
        let rendered = Instance::from_entry(entry);

        assert_eq!(rendered.display_ports.len(), 3);
        assert_eq!(
            rendered.display_ports.get("Grafana").map(String::as_str),
            Some("3000")
        );
    }
}
