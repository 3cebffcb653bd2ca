use foundation::math::Vec3;

use crate::World;
use crate::animation::{ContactIconKind, MotionCategory};
use crate::components::Drawable3D;
use crate::entity::NodeId;
use crate::section::Section;

fn drawable(icon: ContactIconKind) -> Drawable3D {
    let (shape, color) = match icon {
        ContactIconKind::Phone => (Drawable3D::panel(0.8, 1.4), Vec3::new(0.06, 0.73, 0.51)),
        ContactIconKind::Email => (Drawable3D::panel(1.5, 1.0), Vec3::new(0.23, 0.51, 0.96)),
        ContactIconKind::Location => (Drawable3D::sphere(0.5), Vec3::new(0.96, 0.62, 0.04)),
    };
    shape.with_color(color)
}

/// Spawns the phone, email and location icons into the contact section.
/// Each icon is keyed by its name, so hovering or selecting the matching
/// contact card drives it.
pub fn spawn_contact_icons(
    section: &mut Section,
    world: &mut World,
) -> Vec<(ContactIconKind, NodeId)> {
    ContactIconKind::ALL
        .into_iter()
        .map(|icon| {
            let node = section.spawn_animated(
                world,
                drawable(icon),
                MotionCategory::ContactIcon,
                icon.anchor(),
                |b| b.for_item(icon.name()).with_tempo(icon.tempo()),
            );
            (icon, node)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::spawn_contact_icons;
    use crate::World;
    use crate::animation::ContactIconKind;
    use crate::section::{Section, SectionKind, UiEvent};
    use foundation::ids::ItemId;
    use runtime::frame::Frame;

    #[test]
    fn icons_bob_out_of_step_and_grow_on_hover() {
        let mut world = World::new();
        let mut section = Section::mount(SectionKind::Contact);
        let icons = spawn_contact_icons(&mut section, &mut world);
        assert_eq!(icons.len(), 3);
        assert_eq!(world.drawables().len(), 3);

        section.dispatch(UiEvent::HoverEnter(ItemId::from("email")));
        section.on_frame(&mut world, Frame::new(60, 1.0 / 60.0));

        let heights: Vec<f64> = icons
            .iter()
            .map(|(icon, node)| world.transform(*node).unwrap().position.y - icon.anchor().y)
            .collect();
        assert!(heights[0] != heights[1] && heights[1] != heights[2]);

        for (icon, node) in &icons {
            let scale = world.transform(*node).unwrap().scale;
            let expected = if *icon == ContactIconKind::Email { 1.1 } else { 1.0 };
            assert_eq!(scale, expected, "{icon:?}");
        }
    }
}
