//! Launch options: `--seed`, `--name`, and the `MAZE_GRID_SIZE` override.

use maze_core::{DEFAULT_GRID_SIZE, MazeDimensions};

use crate::seed::{SeedChoice, resolve_seed_from_args};

pub const GRID_SIZE_ENV: &str = "MAZE_GRID_SIZE";
pub const MIN_GRID_SIZE: usize = 2;
pub const MAX_GRID_SIZE: usize = 60;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub seed: SeedChoice,
    pub name: Option<String>,
    pub grid_side: usize,
}

impl LaunchOptions {
    pub fn resolve(
        args: &[String],
        grid_size_env: Option<&str>,
        generated_seed: u64,
    ) -> Result<Self, String> {
        let seed = resolve_seed_from_args(args, generated_seed)?;
        let name = flag_value(args, "--name")?.map(str::to_string);
        Ok(Self { seed, name, grid_side: grid_side_from_env(grid_size_env) })
    }

    pub fn dimensions(&self) -> MazeDimensions {
        MazeDimensions::square(self.grid_side).unwrap_or_default()
    }
}

/// Unparseable values fall back to the default side; parsed values are
/// clamped to `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
pub fn grid_side_from_env(value: Option<&str>) -> usize {
    value
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .map_or(DEFAULT_GRID_SIZE, |side| side.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE))
}

/// Value of `flag` given either as `flag value` or `flag=value`. Giving the
/// flag twice is an error.
pub(crate) fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>, String> {
    let mut selected = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();
        let value = if argument == flag {
            let Some(value) = args.get(index + 1) else {
                return Err(format!("missing value for {flag}"));
            };
            index += 1;
            Some(value.as_str())
        } else {
            argument.strip_prefix(flag).and_then(|rest| rest.strip_prefix('='))
        };

        if let Some(value) = value {
            if selected.is_some() {
                return Err(format!("{flag} provided more than once"));
            }
            selected = Some(value);
        }
        index += 1;
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn defaults_apply_without_flags_or_env() {
        let options = LaunchOptions::resolve(&as_args(&["maze"]), None, 77).expect("resolves");
        assert_eq!(options.seed, SeedChoice::Generated(77));
        assert_eq!(options.name, None);
        assert_eq!(options.grid_side, DEFAULT_GRID_SIZE);
        assert_eq!(options.dimensions(), MazeDimensions::default());
    }

    #[test]
    fn name_flag_accepts_both_spellings() {
        let spaced = LaunchOptions::resolve(&as_args(&["maze", "--name", "Ann"]), None, 1);
        assert_eq!(spaced.expect("resolves").name.as_deref(), Some("Ann"));
        let inline = LaunchOptions::resolve(&as_args(&["maze", "--name=Bob Ray"]), None, 1);
        assert_eq!(inline.expect("resolves").name.as_deref(), Some("Bob Ray"));
    }

    #[test]
    fn flags_do_not_swallow_each_other() {
        let args = as_args(&["maze", "--seed", "5", "--name", "Ann"]);
        let options = LaunchOptions::resolve(&args, None, 1).expect("resolves");
        assert_eq!(options.seed, SeedChoice::Cli(5));
        assert_eq!(options.name.as_deref(), Some("Ann"));
    }

    #[test]
    fn similar_prefixes_are_not_flags() {
        let args = as_args(&["maze", "--seeds=4", "--named"]);
        assert_eq!(flag_value(&args, "--seed"), Ok(None));
        assert_eq!(flag_value(&args, "--name"), Ok(None));
    }

    #[test]
    fn duplicate_or_dangling_flags_are_errors() {
        let twice_args = as_args(&["maze", "--name=a", "--name", "b"]);
        let twice = flag_value(&twice_args, "--name");
        assert!(twice.expect_err("duplicate").contains("more than once"));
        let dangling_args = as_args(&["maze", "--name"]);
        let dangling = flag_value(&dangling_args, "--name");
        assert!(dangling.expect_err("dangling").contains("missing"));
    }

    #[test]
    fn grid_size_env_is_clamped() {
        assert_eq!(grid_side_from_env(Some("12")), 12);
        assert_eq!(grid_side_from_env(Some(" 8 ")), 8);
        assert_eq!(grid_side_from_env(Some("1")), MIN_GRID_SIZE);
        assert_eq!(grid_side_from_env(Some("500")), MAX_GRID_SIZE);
        assert_eq!(grid_side_from_env(Some("big")), DEFAULT_GRID_SIZE);
    }
}
