//! The built-in adventures shipped with every library.
//!
//! These are seeded into the catalog store on startup when absent. Their ids
//! are reserved so presentation can tell library cards for built-ins apart
//! from user-registered stories.

use crate::story::{Node, StoryRecord};

/// Reserved ids of the built-in stories.
pub const BUILT_IN_IDS: [&str; 4] = [
    "lexicon_academy",
    "the_library",
    "the_science_lab",
    "training_grounds",
];

/// Whether an id belongs to a built-in story.
pub fn is_built_in(id: &str) -> bool {
    BUILT_IN_IDS.contains(&id)
}

/// All built-in stories, in seed order.
pub fn built_in_stories() -> Vec<StoryRecord> {
    vec![
        lexicon_academy(),
        the_library(),
        the_science_lab(),
        training_grounds(),
    ]
}

fn lexicon_academy() -> StoryRecord {
    StoryRecord::new("lexicon_academy", "Lexicon Academy")
        .with_synopsis(
            "Embark on your journey at the prestigious Lexicon Academy. Uncover the secrets \
             of ancient linguistics and master the power of words to shape your destiny.",
        )
        .with_node(
            "start",
            Node::new(
                "You stand before the [towering|extremely tall] gates of Lexicon Academy. \
                 A [mist|thin fog] clings to the ivy, obscuring the path ahead. The \
                 [ominous|threatening] silence is broken only by the distant [peal|loud ringing] \
                 of a bell. To enter is to [relinquish|give up] your old life and embrace the \
                 [profundity|deep insight] of the Word.",
            )
            .with_choice("Approach the Great Gates", "gates")
            .with_choice("Investigate the Ivy", "ivy")
            .with_choice("Listen to the Bell", "bell"),
        )
        .with_node(
            "gates",
            Node::new(
                "The gates are [unyielding|impossible to move]. You notice a \
                 [cryptic|mysterious] inscription carved into the cold stone. It speaks of a \
                 [key|crucial element] hidden in plain sight. Perhaps the [answers|solutions] \
                 lie within the [annals|historical records] of the school.",
            )
            .with_choice("Search for a hidden mechanism", "start")
            .with_choice("Return to the perimeter", "start"),
        )
        .with_node(
            "ivy",
            Node::new(
                "The ivy is thick and [verdant|bright green]. As you pull back the leaves, \
                 you find a [concealed|hidden] door. It appears to be [ancient|very old], its \
                 wood [weathered|worn by the elements] but strong.",
            )
            .with_choice("Try the door", "start")
            .with_choice("Keep exploring the wall", "start"),
        )
        .with_node(
            "bell",
            Node::new(
                "The sound of the bell is [resonant|deep and full]. It echoes through your \
                 very [soul|innermost being]. You feel a [compulsion|strong urge] to follow \
                 the sound toward the [spire|pointed roof] in the distance.",
            )
            .with_choice("Follow the sound", "start")
            .with_choice("Ignore it and stay put", "start"),
        )
}

fn the_library() -> StoryRecord {
    StoryRecord::new("the_library", "The Library")
        .with_synopsis(
            "Explore the endless corridors of the Great Library. Find forgotten scrolls and \
             expand your vocabulary through ancient texts.",
        )
        .with_node(
            "start",
            Node::new(
                "Rows of [dusty|covered in fine powder] tomes tower around you. A \
                 [fragile|easily broken] manuscript glows faintly beneath the lamp.",
            )
            .with_choice("Read the glowing manuscript", "reading_room")
            .with_choice("Return to the entrance hall", "start"),
        )
        .with_node(
            "reading_room",
            Node::new(
                "In the quiet reading room, an [annotated|commented with notes] lexicon \
                 explains a [nuance|subtle difference] you had long misunderstood.",
            )
            .with_choice("Head back to the stacks", "start"),
        )
}

fn the_science_lab() -> StoryRecord {
    StoryRecord::new("the_science_lab", "The Science Lab")
        .with_synopsis(
            "Master technical terminology and scientific discourse in the state-of-the-art \
             research facility of the Lexicon Academy.",
        )
        .with_node(
            "start",
            Node::new(
                "Beakers [simmer|heat gently] on a rack while a [meticulous|very careful] \
                 researcher records each observation.",
            )
            .with_choice("Observe the experiment", "experiment")
            .with_choice("Review the notes", "notes"),
        )
        .with_node(
            "experiment",
            Node::new(
                "The reaction changes [abruptly|suddenly], revealing a \
                 [volatile|likely to change quickly] compound.",
            )
            .with_choice("Back to the lab bench", "start"),
        )
        .with_node(
            "notes",
            Node::new("The notes are [precise|very exact] and [empirical|based on observation] in tone.")
                .with_choice("Back to the lab bench", "start"),
        )
}

fn training_grounds() -> StoryRecord {
    StoryRecord::new("training_grounds", "The Training Grounds")
        .with_synopsis(
            "Sharpen your skills with rapid-fire exercises and competitive word-building \
             challenges against the Academy's elite.",
        )
        .with_node(
            "start",
            Node::new(
                "Instructors call out [rapid|very fast] prompts while students answer with \
                 [coherent|logically connected] definitions.",
            )
            .with_choice("Take the timed drill", "drill")
            .with_choice("Review fundamentals", "review"),
        )
        .with_node(
            "drill",
            Node::new("Your responses grow more [succinct|brief and clear] as confidence builds.")
                .with_choice("Reset the challenge", "start"),
        )
        .with_node(
            "review",
            Node::new("A mentor offers [constructive|helpfully critical] feedback on each attempt.")
                .with_choice("Return to training", "start"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup;

    #[test]
    fn test_ids_match_reserved_set() {
        let stories = built_in_stories();
        assert_eq!(stories.len(), BUILT_IN_IDS.len());

        for (story, id) in stories.iter().zip(BUILT_IN_IDS) {
            assert_eq!(story.id, id);
            assert!(is_built_in(&story.id));
        }
        assert!(!is_built_in("somebody_elses_story"));
    }

    #[test]
    fn test_every_story_starts_at_start() {
        for story in built_in_stories() {
            assert_eq!(story.entry_node(), Some("start"), "{}", story.id);
        }
    }

    #[test]
    fn test_no_dangling_choice_targets() {
        for story in built_in_stories() {
            for (id, node) in &story.nodes {
                for choice in &node.choices {
                    assert!(
                        story.nodes.contains_key(&choice.next),
                        "{}/{} -> {}",
                        story.id,
                        id,
                        choice.next
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_node_has_discoverable_words() {
        for story in built_in_stories() {
            for (id, node) in &story.nodes {
                let segments = markup::parse(&node.text);
                assert!(
                    markup::vocab_count(&segments) > 0,
                    "{}/{} has no vocabulary",
                    story.id,
                    id
                );
            }
        }
    }
}
