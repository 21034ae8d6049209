//! Listener interface for pushed snapshot rows

use crate::component::{ConceptState, RelationshipState};

/// Receives component rows from a record stream reader.
///
/// Both methods default to doing nothing so a listener only overrides the
/// row kinds it cares about. Callbacks cannot fail: a listener that has to do
/// fallible work keeps the first failure and reports it once the stream ends.
pub trait ComponentFactory {
    fn new_concept_state(&mut self, _concept: &ConceptState) {}

    fn new_relationship_state(&mut self, _relationship: &RelationshipState) {}
}

impl<T: ComponentFactory + ?Sized> ComponentFactory for &mut T {
    fn new_concept_state(&mut self, concept: &ConceptState) {
        (**self).new_concept_state(concept);
    }

    fn new_relationship_state(&mut self, relationship: &RelationshipState) {
        (**self).new_relationship_state(relationship);
    }
}

/// Fans each row out to both listeners, left first.
impl<A: ComponentFactory, B: ComponentFactory> ComponentFactory for (A, B) {
    fn new_concept_state(&mut self, concept: &ConceptState) {
        self.0.new_concept_state(concept);
        self.1.new_concept_state(concept);
    }

    fn new_relationship_state(&mut self, relationship: &RelationshipState) {
        self.0.new_relationship_state(relationship);
        self.1.new_relationship_state(relationship);
    }
}
