use super::{CatalogEntry, Port, Variable};

pub const ENTRY: CatalogEntry = CatalogEntry {
    key: "mariadb",
    aliases: &[],
    name: "MariaDB",
    description: "MariaDB database with phpMyAdmin for web management",
    summary: "MariaDB + phpMyAdmin for databases",
    root_dir: "mariadb-stack",
    dirs: &["mariadb"],
    files: &[
        (
            "docker-compose.yml",
            include_str!("../../templates/mariadb/docker-compose.yml"),
        ),
        ("README.md", include_str!("../../templates/mariadb/README.md")),
        (".gitignore", include_str!("../../templates/mariadb/gitignore")),
    ],
    variables: &[
        Variable {
            name: "MYSQL_ROOT_PASSWORD",
            description: "MariaDB root password",
            default: "rootpassword",
        },
        Variable {
            name: "MYSQL_DATABASE",
            description: "MariaDB database name",
            default: "mydb",
        },
        Variable {
            name: "MYSQL_USER",
            description: "MariaDB user",
            default: "myuser",
        },
        Variable {
            name: "MYSQL_PASSWORD",
            description: "MariaDB user password",
            default: "mypassword",
        },
    ],
    ports: &[
        Port {
            service: "mariadb",
            description: "MariaDB database port",
            default: "3306",
            internal: "3306",
        },
        Port {
            service: "phpmyadmin",
            description: "phpMyAdmin web interface port",
            default: "8080",
            internal: "80",
        },
    ],
    fixed_ports: &[],
};
