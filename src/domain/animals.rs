pub trait Animal: Send + Sync {
    fn movement(&self) -> &'static str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Bird;

impl Animal for Bird {
    fn movement(&self) -> &'static str {
        "Flying"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Fish;

impl Animal for Fish {
    fn movement(&self) -> &'static str {
        "Swimming"
    }
}

/// Works for any [`Animal`]; callers never need to know which one.
pub fn describe_movement(animal: &dyn Animal) -> String {
    let line = format!("The animal is {}.", animal.movement());
    tracing::info!("{}", line);
    line
}
