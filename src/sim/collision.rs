//! Collision detection and response for axis-aligned boxes
//!
//! Only vertical response exists: platforms catch a falling player and stop a
//! rising one, but never block sideways motion. Resolution is discrete (no
//! sweep), so a player moving faster than a platform is thick can pass
//! through it.

use super::rect::Rect;
use super::state::{Platform, Player};

/// Strict AABB overlap test. Rects that only share an edge do not overlap.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// How a single platform affected the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Landed on top
    Landed,
    /// Hit the underside while rising
    Bonked,
}

/// Resolve the player against every platform, in order.
///
/// `on_ground` is cleared first and only set again by a landing. The player
/// box is sampled once before the loop; each overlapping platform is then
/// judged against the player's current y and vertical velocity. A landing or
/// bonk zeroes vertical velocity, so a later platform only applies if an
/// earlier one did not.
///
/// Returns the last contact made, if any.
pub fn resolve_platform_collisions(player: &mut Player, platforms: &[Platform]) -> Option<Contact> {
    let player_rect = player.rect();
    player.on_ground = false;

    let mut last = None;
    for platform in platforms {
        let rect = platform.rect;
        if !rects_overlap(&player_rect, &rect) {
            continue;
        }

        if player.vel.y > 0.0 {
            // Falling: only a platform whose top is below ours can catch us
            if player.pos.y < rect.y {
                player.pos.y = rect.y - player.size.y;
                player.vel.y = 0.0;
                player.on_ground = true;
                last = Some(Contact::Landed);
            }
        } else if player.vel.y < 0.0 && player.pos.y > rect.y {
            player.pos.y = rect.bottom();
            player.vel.y = 0.0;
            last = Some(Contact::Bonked);
        }
    }

    last
}
