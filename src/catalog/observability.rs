use super::CatalogEntry;

// Ports are fixed here, so the pipeline goes straight to the auto-start
// question.
pub const ENTRY: CatalogEntry = CatalogEntry {
    key: "observability",
    aliases: &["obs"],
    name: "Observability",
    description: "Observability stack with Prometheus, Grafana and Node Exporter",
    summary: "Prometheus + Grafana + Node Exporter for monitoring",
    root_dir: "observability-stack",
    dirs: &[
        "prometheus",
        "prometheus/data",
        "grafana/data",
        "grafana/provisioning",
        "grafana/provisioning/datasources",
    ],
    files: &[
        (
            "docker-compose.yml",
            include_str!("../../templates/observability/docker-compose.yml"),
        ),
        (
            "prometheus/prometheus.yml",
            include_str!("../../templates/observability/prometheus.yml"),
        ),
        (
            "grafana/provisioning/datasources/prometheus.yml",
            include_str!("../../templates/observability/datasource.yml"),
        ),
        (
            "README.md",
            include_str!("../../templates/observability/README.md"),
        ),
        (
            ".gitignore",
            include_str!("../../templates/observability/gitignore"),
        ),
    ],
    variables: &[],
    ports: &[],
    fixed_ports: &[
        ("Prometheus", "9090"),
        ("Grafana", "3000"),
        ("Node Exporter", "9100"),
    ],
};
