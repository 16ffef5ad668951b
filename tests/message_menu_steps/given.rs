//! Given steps for message menu BDD scenarios.

use super::world::MenuWorld;
use marginalia::{domain::MessageSnapshot, formatting::ports::MessageEditError};
use rstest_bdd_macros::given;

#[given(r#"I am signed in as "{user}""#)]
fn signed_in_as(world: &mut MenuWorld, user: String) {
    world.sign_in(&user);
}

#[given(r#"a message "{id}" by "{author}" with content "{content}""#)]
fn a_message(world: &mut MenuWorld, id: String, author: String, content: String) {
    world.message = Some(MessageSnapshot::new(id, "channel-1", author, content));
}

#[given("the next edit is rejected")]
fn next_edit_rejected(world: &mut MenuWorld) {
    world.editor.fail_next(MessageEditError::Rejected {
        status: 400,
        reason: "invalid form body".to_owned(),
    });
}
