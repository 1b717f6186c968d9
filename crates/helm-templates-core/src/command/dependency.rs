use super::HELM;

/// `helm dependency <build|list|update> <chart>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyCommand {
    Build,
    List,
    Update,
}

impl DependencyCommand {
    pub fn subcommand(&self) -> &'static str {
        match self {
            DependencyCommand::Build => "build",
            DependencyCommand::List => "list",
            DependencyCommand::Update => "update",
        }
    }

    pub fn helm_arguments(&self, chart: &str) -> Vec<String> {
        vec![
            HELM.to_string(),
            "dependency".to_string(),
            self.subcommand().to_string(),
            chart.to_string(),
        ]
    }
}
