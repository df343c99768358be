//! Sprite drawing for every entity and the HUD
//!
//! Order: clear, platforms, collectibles, player, UI. A completed level only
//! gets the clear and the UI.

use super::DrawSink;
use crate::config::Palette;
use crate::sim::{Collectible, Game, Platform, Player};
use crate::to_pixel;

/// Draw one full frame
pub fn draw_game<S: DrawSink + ?Sized>(game: &Game, sink: &mut S) {
    let palette = &game.config.palette;

    sink.set_rgb(palette.background);
    sink.clear_screen();

    if !game.game_complete() {
        for platform in &game.platforms {
            draw_platform(platform, sink);
        }

        for collectible in game.collectibles.iter().filter(|c| !c.collected) {
            draw_collectible(collectible, palette, sink);
        }

        draw_player(&game.player, palette, sink);
    }

    draw_ui(game, sink);
}

pub fn draw_platform<S: DrawSink + ?Sized>(platform: &Platform, sink: &mut S) {
    let r = platform.rect;
    sink.set_rgb(platform.color);
    sink.fill_rect(to_pixel(r.x), to_pixel(r.y), to_pixel(r.width), to_pixel(r.height));
}

pub fn draw_collectible<S: DrawSink + ?Sized>(collectible: &Collectible, palette: &Palette, sink: &mut S) {
    let x = to_pixel(collectible.pos.x);
    let y = to_pixel(collectible.bobbed_pos().y);
    let w = to_pixel(collectible.size.x);
    let h = to_pixel(collectible.size.y);

    sink.set_rgb(palette.collectible);

    if collectible.is_star {
        // Five points plus a filled core, centred on the sprite
        let cx = x + w / 2;
        let cy = y + h / 2;
        for (dx, dy) in [
            (0, 0),
            (0, -3),
            (-2, 2),
            (2, 2),
            (-3, -1),
            (3, -1),
            (-1, 0),
            (1, 0),
            (0, 1),
        ] {
            sink.set_pixel(cx + dx, cy + dy);
        }
    } else {
        sink.fill_rect(x, y, w, h);
        // Shine
        sink.set_rgb(palette.highlight);
        sink.set_pixel(x + 1, y + 1);
    }
}

pub fn draw_player<S: DrawSink + ?Sized>(player: &Player, palette: &Palette, sink: &mut S) {
    sink.set_rgb(palette.player);
    sink.fill_rect(
        to_pixel(player.pos.x),
        to_pixel(player.pos.y),
        to_pixel(player.size.x),
        to_pixel(player.size.y),
    );

    // Eyes
    sink.set_rgb(palette.highlight);
    sink.set_pixel(to_pixel(player.pos.x + 2.0), to_pixel(player.pos.y + 2.0));
    sink.set_pixel(to_pixel(player.pos.x + 5.0), to_pixel(player.pos.y + 2.0));
}

/// Score, then the win banner when the level is done
pub fn draw_ui<S: DrawSink + ?Sized>(game: &Game, sink: &mut S) {
    let palette = &game.config.palette;

    sink.set_rgb(palette.score_text);
    sink.draw_text(&format!("Score: {}", game.score), 2, 2);

    if game.game_complete() {
        sink.set_rgb(palette.banner_text);
        sink.draw_text("You found the star!", 10, 60);
        sink.draw_text("Press X to restart", 10, 70);
    } else if game.all_collected() {
        // Every pickup taken but the star flag not yet turned into Complete
        sink.set_rgb(palette.banner_text);
        sink.draw_text("Level Complete!", 25, 60);
        sink.draw_text("Press X to restart", 15, 70);
    }
}
