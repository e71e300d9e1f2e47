//! Social interaction embeds.

use rand::{seq::IndexedRandom, Rng};
use serenity::all::{CreateEmbed, UserId};

use crate::{error::AppError, model::social::SocialAction};

/// Builds the embed for `actor` performing `action` on `target`.
///
/// # Arguments
/// - `action` - Interaction to render
/// - `actor` - Member using the command
/// - `target` - Member on the receiving end
/// - `rng` - Source used to pick the GIF
///
/// # Returns
/// - `Ok(CreateEmbed)` - Embed with a random GIF of the action
/// - `Err(AppError::BadRequest)` - The actor targeted themselves
pub fn social_embed<R: Rng + ?Sized>(
    action: SocialAction,
    actor: UserId,
    target: UserId,
    rng: &mut R,
) -> Result<CreateEmbed, AppError> {
    if actor == target {
        return Err(AppError::BadRequest(format!(
            "You can't {} yourself, pick someone else!",
            action.name()
        )));
    }

    let mut embed = CreateEmbed::new()
        .description(format!("<@{}> {} <@{}>!", actor, action.verb(), target))
        .color(action.color());
    if let Some(gif) = action.gifs().choose(rng) {
        embed = embed.image(*gif);
    }

    Ok(embed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn renders_actor_target_and_gif() {
        let mut rng = StdRng::seed_from_u64(7);

        let embed = social_embed(SocialAction::Hug, UserId::new(1), UserId::new(2), &mut rng)
            .unwrap();
        let embed = serde_json::to_value(embed).unwrap();

        assert_eq!(embed["description"], "<@1> hugged <@2>!");
        let gif = embed["image"]["url"].as_str().unwrap();
        assert!(SocialAction::Hug.gifs().iter().any(|candidate| *candidate == gif));
    }

    #[test]
    fn rejects_self_target() {
        let mut rng = StdRng::seed_from_u64(7);

        let result = social_embed(SocialAction::Slap, UserId::new(1), UserId::new(1), &mut rng);

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
