use std::fmt;

// =============================================================================
// Milestone 1: The product
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "public {} {};", self.ty, self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Class {
    pub name: String,
    pub fields: Vec<Field>,
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "public class {}", self.name)?;
        writeln!(f, "{{")?;
        for field in &self.fields {
            writeln!(f, "  {field}")?;
        }
        writeln!(f, "}}")
    }
}

// =============================================================================
// Milestone 2: Fluent builder
// =============================================================================

/// Consuming builder: each call takes `self` and hands it back, so calls chain
/// straight off `new`.
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    class: Class,
}

impl CodeBuilder {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            class: Class {
                name: root_name.into(),
                fields: Vec::new(),
            },
        }
    }

    pub fn add_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.class.fields.push(Field {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    pub fn build(&self) -> String {
        self.class.to_string()
    }

    pub fn into_class(self) -> Class {
        self.class
    }
}

impl fmt::Display for CodeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.class.fmt(f)
    }
}

// =============================================================================
// Example usage
// =============================================================================

fn main() {
    let builder = CodeBuilder::new("Person")
        .add_field("name", "String")
        .add_field("age", "int");

    println!("{}", builder.build());
}
