//! Shapes behind one trait. New shapes are added by implementing [`Shape`];
//! nothing in this module changes when they are.

use std::f64::consts::PI;

pub trait Shape: Send + Sync {
    fn area(&self) -> f64;
    fn kind(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn kind(&self) -> &'static str {
        "Rectangle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    fn kind(&self) -> &'static str {
        "Circle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        self.base * self.height / 2.0
    }

    fn kind(&self) -> &'static str {
        "Triangle"
    }
}

pub fn describe_area(shape: &dyn Shape) -> String {
    format!("Area of {} is {}", shape.kind(), shape.area())
}

pub fn default_shapes() -> Vec<Box<dyn Shape>> {
    vec![
        Box::new(Rectangle::new(10.0, 20.0)),
        Box::new(Circle::new(10.0)),
        Box::new(Triangle::new(10.0, 20.0)),
    ]
}
