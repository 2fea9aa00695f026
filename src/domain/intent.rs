use crate::domain::model::{App, Labels, PortDefinition, RegistrationIntent, Task, CONSUL_LABEL_KEY};

/// Labels with this value are published as tags named after their key.
pub const TAG_LABEL_VALUE: &str = "tag";

impl App {
    /// Derives how `task` should be registered as a service.
    ///
    /// The first port definition carrying a non-blank `consul` label overrides
    /// the app-level name, picks the task port at its own index and contributes
    /// its `tag` labels as extra tags. Without one, the app's `consul` label (or
    /// the app id) names the service and the task's first port is published.
    pub fn registration_intent(&self, task: &Task, separator: &str) -> RegistrationIntent {
        let definition = self.consul_port_definition();

        let name = definition
            .and_then(|(_, definition)| custom_name(&definition.labels, separator))
            .or_else(|| custom_name(&self.labels, separator))
            .unwrap_or_else(|| join_segments(self.id.as_str(), separator));

        let port = definition
            .and_then(|(index, _)| task.ports.get(index))
            .or_else(|| task.ports.first())
            .copied()
            .unwrap_or_default();

        let mut tags: Vec<String> = Vec::new();
        let definition_labels = definition.map(|(_, definition)| &definition.labels);
        for (key, value) in self.labels.iter().chain(definition_labels.into_iter().flatten()) {
            if value == TAG_LABEL_VALUE && key != CONSUL_LABEL_KEY && !tags.contains(key) {
                tags.push(key.clone());
            }
        }

        RegistrationIntent { name, port, tags }
    }

    fn consul_port_definition(&self) -> Option<(usize, &PortDefinition)> {
        self.port_definitions.iter().enumerate().find(|(_, definition)| {
            definition
                .labels
                .get(CONSUL_LABEL_KEY)
                .is_some_and(|value| !value.trim().is_empty())
        })
    }
}

// `true` only marks the app for registration; any other non-blank value is a
// service name. Comparison is exact-case.
fn custom_name(labels: &Labels, separator: &str) -> Option<String> {
    let value = labels.get(CONSUL_LABEL_KEY)?.trim();
    if value.is_empty() || value == "true" {
        return None;
    }
    let name = join_segments(value, separator);
    (!name.is_empty()).then_some(name)
}

fn join_segments(path: &str, separator: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
