use colored::Colorize;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

// =============================================================================
// Milestone 1: Shapes that know how to clone themselves
// =============================================================================

pub trait Shape {
    fn clone_shape(&self) -> Box<dyn Shape>;
    fn id(&self) -> Uuid;
    fn describe(&self) -> String;
}

#[derive(Debug, PartialEq)]
pub struct Rectangle {
    id: Uuid,
    pub height: u32,
    pub width: u32,
}

impl Rectangle {
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            height,
            width,
        }
    }
}

// Hand-written so a copy gets its own identity.
impl Clone for Rectangle {
    fn clone(&self) -> Self {
        Self::new(self.height, self.width)
    }
}

impl Shape for Rectangle {
    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn describe(&self) -> String {
        format!("Rectangle {{ height: {}, width: {} }}", self.height, self.width)
    }
}

#[derive(Debug, PartialEq)]
pub struct Circle {
    id: Uuid,
    pub radius: u32,
}

impl Circle {
    pub fn new(radius: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            radius,
        }
    }
}

impl Clone for Circle {
    fn clone(&self) -> Self {
        Self::new(self.radius)
    }
}

impl Shape for Circle {
    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn describe(&self) -> String {
        format!("Circle {{ radius: {} }}", self.radius)
    }
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_shape()
    }
}

// =============================================================================
// Milestone 2: Copy through serialization
// =============================================================================

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("bincode round trip failed: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("json round trip failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Foo {
    pub stuff: i32,
    pub whatever: String,
    pub tags: Vec<String>,
}

impl fmt::Display for Foo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Foo{{stuff={}, whatever='{}', tags={:?}}}",
            self.stuff, self.whatever, self.tags
        )
    }
}

/// Deep copy by encoding to bytes and decoding a fresh value.
pub fn roundtrip<T: Serialize + DeserializeOwned>(value: &T) -> Result<T, CopyError> {
    let bytes = bincode::serialize(value)?;
    Ok(bincode::deserialize(&bytes)?)
}

pub fn roundtrip_json<T: Serialize + DeserializeOwned>(value: &T) -> Result<T, CopyError> {
    let text = serde_json::to_string(value)?;
    Ok(serde_json::from_str(&text)?)
}

// =============================================================================
// Example usage
// =============================================================================

fn report(label: &str, original: &dyn Shape) {
    let copy = original.clone_shape();
    println!("{label} Original: {} ({})", original.describe(), original.id());
    println!("{label} Cloned: {} ({})", copy.describe(), copy.id());
    println!(
        "Is Cloning of {label} success: {}",
        (copy.describe() == original.describe() && copy.id() != original.id())
            .to_string()
            .green()
    );
}

fn main() {
    report("Circle", &Circle::new(20));
    report("Rectangle", &Rectangle::new(10, 20));

    println!("\n{}", "=== Copy through serialization ===".bold());
    let foo = Foo {
        stuff: 42,
        whatever: "life".to_string(),
        tags: vec!["answer".to_string()],
    };
    match roundtrip(&foo).and_then(|copy| Ok((copy, roundtrip_json(&foo)?))) {
        Ok((binary, json)) => {
            println!("{foo}");
            println!("{binary} (bincode)");
            println!("{json} (json)");
        }
        Err(err) => eprintln!("{}", err.to_string().red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_clone_keeps_radius() {
        let circle = Circle::new(20);
        let copy = circle.clone();
        assert_eq!(copy.radius, 20);
        assert_ne!(copy.id(), circle.id());
    }

    #[test]
    fn test_rectangle_clone_keeps_fields() {
        let rect = Rectangle::new(10, 20);
        let copy = rect.clone_shape();
        assert_eq!(copy.describe(), "Rectangle { height: 10, width: 20 }");
        assert_ne!(copy.id(), rect.id());
    }

    #[test]
    fn test_clone_heterogeneous_shapes() {
        let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Circle::new(1)), Box::new(Rectangle::new(2, 3))];
        let copies = shapes.clone();

        for (original, copy) in shapes.iter().zip(&copies) {
            assert_eq!(original.describe(), copy.describe());
            assert_ne!(original.id(), copy.id());
        }
    }

    #[test]
    fn test_bincode_deep_copy() {
        let foo = Foo {
            stuff: 42,
            whatever: "life".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
        };
        let mut copy = roundtrip(&foo).unwrap();
        assert_eq!(copy, foo);

        copy.tags.push("c".to_string());
        assert_eq!(foo.tags.len(), 2);
    }

    #[test]
    fn test_json_deep_copy() {
        let foo = Foo {
            stuff: -1,
            whatever: "quote ' and \" chars".to_string(),
            tags: Vec::new(),
        };
        assert_eq!(roundtrip_json(&foo).unwrap(), foo);
    }

    #[test]
    fn test_display() {
        let foo = Foo {
            stuff: 42,
            whatever: "life".to_string(),
            tags: vec![],
        };
        assert_eq!(foo.to_string(), "Foo{stuff=42, whatever='life', tags=[]}");
    }
}
