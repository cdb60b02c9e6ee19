// =============================================================================
// Milestone 1: Low-level storage of relationships
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Default)]
pub struct Relationships {
    relations: Vec<(Person, Relationship, Person)>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn relations(&self) -> &[(Person, Relationship, Person)] {
        &self.relations
    }

    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        self.relations
            .push((parent.clone(), Relationship::Parent, child.clone()));
        self.relations
            .push((child.clone(), Relationship::Child, parent.clone()));
    }

    pub fn add_siblings(&mut self, a: &Person, b: &Person) {
        self.relations.push((a.clone(), Relationship::Sibling, b.clone()));
        self.relations.push((b.clone(), Relationship::Sibling, a.clone()));
    }
}

// =============================================================================
// Milestone 2: Before, the high-level module digs into the storage layout
// =============================================================================

pub struct ResearchBefore {
    pub findings: Vec<String>,
}

impl ResearchBefore {
    pub fn new(relationships: &Relationships) -> Self {
        let findings = relationships
            .relations()
            .iter()
            .filter(|(from, rel, _)| from.name == "John" && *rel == Relationship::Parent)
            .map(|(_, _, child)| format!("John has a child called {}", child.name))
            .collect();
        Self { findings }
    }
}

// =============================================================================
// Milestone 3: After, both sides depend on an abstraction
// =============================================================================

pub trait RelationshipBrowser {
    fn find_all_children_of(&self, name: &str) -> Vec<Person>;
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of(&self, name: &str) -> Vec<Person> {
        self.relations
            .iter()
            .filter(|(from, rel, _)| from.name == name && *rel == Relationship::Parent)
            .map(|(_, _, child)| child.clone())
            .collect()
    }
}

pub struct Research {
    pub findings: Vec<String>,
}

impl Research {
    pub fn new(browser: &dyn RelationshipBrowser, name: &str) -> Self {
        let findings = browser
            .find_all_children_of(name)
            .into_iter()
            .map(|child| format!("{name} has a child called {}", child.name))
            .collect();
        Self { findings }
    }
}

fn main() {
    let parent = Person::new("John");
    let chris = Person::new("Chris");
    let matt = Person::new("Matt");

    let mut relationships = Relationships::new();
    relationships.add_parent_and_child(&parent, &chris);
    relationships.add_parent_and_child(&parent, &matt);
    relationships.add_siblings(&chris, &matt);

    println!("-- before --");
    for line in ResearchBefore::new(&relationships).findings {
        println!("{line}");
    }

    println!("-- after --");
    for line in Research::new(&relationships, "John").findings {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family() -> Relationships {
        let john = Person::new("John");
        let mut relationships = Relationships::new();
        relationships.add_parent_and_child(&john, &Person::new("Chris"));
        relationships.add_parent_and_child(&john, &Person::new("Matt"));
        relationships
    }

    #[test]
    fn test_both_directions_are_stored() {
        let relationships = family();
        assert_eq!(relationships.relations().len(), 4);
        assert_eq!(relationships.relations()[1].1, Relationship::Child);
    }

    #[test]
    fn test_find_children() {
        let names: Vec<_> = family()
            .find_all_children_of("John")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Chris", "Matt"]);
        assert!(family().find_all_children_of("Chris").is_empty());
    }

    #[test]
    fn test_before_and_after_agree() {
        let relationships = family();
        assert_eq!(
            ResearchBefore::new(&relationships).findings,
            Research::new(&relationships, "John").findings
        );
    }

    #[test]
    fn test_siblings_are_not_children() {
        let mut relationships = family();
        relationships.add_siblings(&Person::new("John"), &Person::new("Jane"));
        assert_eq!(relationships.find_all_children_of("John").len(), 2);
    }

    struct FixedBrowser;

    impl RelationshipBrowser for FixedBrowser {
        fn find_all_children_of(&self, _name: &str) -> Vec<Person> {
            vec![Person::new("Stub")]
        }
    }

    #[test]
    fn test_research_accepts_any_browser() {
        let research = Research::new(&FixedBrowser, "Anyone");
        assert_eq!(research.findings, vec!["Anyone has a child called Stub"]);
    }
}
