use super::{CatalogEntry, Port, Variable};

pub const ENTRY: CatalogEntry = CatalogEntry {
    key: "lamp",
    aliases: &[],
    name: "LAMP",
    description: "LAMP stack with Apache, MySQL 8.0, PHP 8.2 and phpMyAdmin",
    summary: "LAMP stack with Apache, MySQL, PHP and phpMyAdmin",
    root_dir: "lamp-stack",
    dirs: &["www", "mysql", "logs"],
    files: &[
        (
            "docker-compose.yml",
            include_str!("../../templates/lamp/docker-compose.yml"),
        ),
        ("www/index.php", include_str!("../../templates/lamp/index.php")),
        ("README.md", include_str!("../../templates/lamp/README.md")),
        (".gitignore", include_str!("../../templates/lamp/gitignore")),
    ],
    variables: &[
        Variable {
            name: "MYSQL_ROOT_PASSWORD",
            description: "MySQL root password",
            default: "rootpassword",
        },
        Variable {
            name: "MYSQL_DATABASE",
            description: "MySQL database name",
            default: "lamp_db",
        },
        Variable {
            name: "MYSQL_USER",
            description: "MySQL user",
            default: "lamp_user",
        },
        Variable {
            name: "MYSQL_PASSWORD",
            description: "MySQL user password",
            default: "lamp_password",
        },
    ],
    ports: &[
        Port {
            service: "web",
            description: "Apache web server port",
            default: "8080",
            internal: "80",
        },
        Port {
            service: "mysql",
            description: "MySQL database port",
            default: "3306",
            internal: "3306",
        },
        Port {
            service: "phpmyadmin",
            description: "phpMyAdmin web interface port",
            default: "8081",
            internal: "80",
        },
    ],
    fixed_ports: &[],
};
