//! Small, separate capabilities. A type implements only what it can do, so
//! a `Robot` never has to provide an `eat` it cannot honour.

pub trait Workable: Send + Sync {
    fn work(&self) -> String;
}

pub trait Eatable: Send + Sync {
    fn eat(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Human;

impl Workable for Human {
    fn work(&self) -> String {
        "Human is working...".to_string()
    }
}

impl Eatable for Human {
    fn eat(&self) -> String {
        "Human is eating...".to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Robot;

impl Workable for Robot {
    fn work(&self) -> String {
        "Robot is working...".to_string()
    }
}

pub fn run_shift(workers: &[&dyn Workable]) -> Vec<String> {
    workers
        .iter()
        .map(|w| {
            let line = w.work();
            tracing::info!("{}", line);
            line
        })
        .collect()
}

pub fn lunch_break(eaters: &[&dyn Eatable]) -> Vec<String> {
    eaters
        .iter()
        .map(|e| {
            let line = e.eat();
            tracing::info!("{}", line);
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_shift_accepts_humans_and_robots() {
        let crew: [&dyn Workable; 2] = [&Human, &Robot];
        let lines = run_shift(&crew);
        assert_eq!(lines, vec!["Human is working...", "Robot is working..."]);
    }

    #[test]
    fn test_lunch_break_only_for_eaters() {
        let eaters: [&dyn Eatable; 1] = [&Human];
        let lines = lunch_break(&eaters);
        assert_eq!(lines, vec!["Human is eating..."]);
    }
}
