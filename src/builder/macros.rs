//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`](crate::core::MachineConfig) inline.
///
/// States and transitions keep the order they are written in.
///
/// # Example
///
/// ```
/// use rewind::machine_config;
///
/// let config = machine_config! {
///     initial: "off",
///     states: {
///         "off" => { "turnOn" => "on" },
///         "on" => { "turnOff" => "off", "unplug" => "dead" },
///         "dead" => {},
///     }
/// };
///
/// assert_eq!(config.initial, "off");
/// assert_eq!(config.transition("on", "unplug").unwrap(), "dead");
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $($event:expr => $target:expr),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let config = $crate::core::MachineConfig::new($initial);
        $(
            let config = config.with_state(
                $state,
                $crate::core::StateDefinition::new() $(.on($event, $target))*,
            );
        )*
        config
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::StateId;

    #[test]
    fn machine_config_macro_builds_config() {
        let config = machine_config! {
            initial: "draft",
            states: {
                "draft" => { "submit" => "review" },
                "review" => { "approve" => "published", "reject" => "draft" },
                "published" => {},
            }
        };

        assert_eq!(config.initial, "draft");
        let names: Vec<&str> = config.state_names().map(StateId::as_str).collect();
        assert_eq!(names, vec!["draft", "review", "published"]);
        assert_eq!(config.transition("review", "reject").unwrap(), "draft");
        assert!(config.state("published").unwrap().transitions.is_empty());
    }

    #[test]
    fn machine_config_macro_accepts_owned_names() {
        let start = String::from("start");
        let config = machine_config! {
            initial: start.clone(),
            states: {
                start => { "go" => "start" }
            }
        };

        assert!(config.has_state("start"));
    }

    #[test]
    fn machine_config_macro_allows_no_states() {
        let config = machine_config! {
            initial: "nothing",
            states: {}
        };

        assert!(config.states.is_empty());
    }
}
