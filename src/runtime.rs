use crate::{GameSession, Position, SessionView};
use async_trait::async_trait;
use rand::Rng;

/// Describes one input from the display collaborator.
///
/// # See Also
///
/// * [Client::get_action]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Action {
    /// Request placing the pending stone on a cell. Invalid requests are ignored.
    Place(Position),
    /// Abandon the current game and start a fresh one.
    NewGame,
    /// Show or hide the valid positions in views.
    ToggleHint(bool),
    /// Stop the runtime.
    Quit,
}

/// Defines the `get_action` and `update_view` methods connecting the runtime to a
/// display collaborator.
///
/// [`Client::get_action`] blocks execution until getting input.
/// [`Client::update_view`] may execute in parallel with other display work.
///
/// # Errors
///
/// The implementor of [`Client`] is responsible for returning an error to prevent the
/// runtime from running indefinitely when no input arrives. When a method call fails,
/// the runtime is stopped, and the error is propagated back to the calling code.
#[async_trait]
pub trait Client<E> {
    /// Gets the next [`Action`] from the display collaborator.
    fn get_action(&self) -> Result<Action, E>;

    /// Updates the display collaborator with the state of the game.
    async fn update_view<'a>(&self, session_view: &'a SessionView<'a>) -> Result<(), E>;
}

/// It creates a fresh [session](GameSession) and repeatedly sends the current view to
/// the client and asks for an [`Action`] until the client [quits](Action::Quit).
/// Invalid [placement requests](Action::Place) change nothing and draw no penalty,
/// the next view simply looks the same.
///
/// # Arguments
///
/// * `client`: The display collaborator.
/// * `rng`: The source of randomness for every game started during this runtime.
///
/// # Errors
///
/// When the client fails to send input or receive a view update.
pub async fn run<C, E, R>(client: &C, rng: &mut R) -> Result<(), E>
where
    C: Client<E>,
    R: Rng + ?Sized,
{
    let mut session = GameSession::new(rng);

    loop {
        client.update_view(&session.session_view()).await?;

        match client.get_action()? {
            Action::Place(position) => {
                session.place_stone(position);
            }
            Action::NewGame => session.new_game(rng),
            Action::ToggleHint(show_hint) => session.set_show_hint(show_hint),
            Action::Quit => return Ok(()),
        }
    }
}
