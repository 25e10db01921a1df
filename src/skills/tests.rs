use super::*;

#[test]
fn fresh_cooldowns_are_all_ready() {
    let cooldowns = SkillCooldowns::default();
    for skill in Skill::ALL {
        assert!(cooldowns.ready(skill));
        assert_eq!(cooldowns.remaining(skill), 0.0);
    }
}

#[test]
fn using_a_skill_arms_its_cooldown() {
    let mut cooldowns = SkillCooldowns::default();
    assert!(cooldowns.try_use(Skill::Spike, 3.0));
    assert!(!cooldowns.ready(Skill::Spike));
    assert_eq!(cooldowns.remaining(Skill::Spike), 3.0);

    // Other skills are unaffected.
    assert!(cooldowns.ready(Skill::Dash));
}

#[test]
fn cooling_skill_refuses_use() {
    let mut cooldowns = SkillCooldowns::default();
    cooldowns.try_use(Skill::Bolt, 2.0);
    assert!(!cooldowns.try_use(Skill::Bolt, 2.0));

    cooldowns.tick(1.0);
    assert!(!cooldowns.try_use(Skill::Bolt, 2.0));

    cooldowns.tick(1.5);
    assert!(cooldowns.try_use(Skill::Bolt, 2.0));
}

#[test]
fn tick_never_goes_below_zero() {
    let mut cooldowns = SkillCooldowns::default();
    cooldowns.try_use(Skill::Shockwave, 1.0);
    cooldowns.tick(100.0);
    assert_eq!(cooldowns.remaining(Skill::Shockwave), 0.0);
    for skill in Skill::ALL {
        assert!(cooldowns.ready(skill));
    }
}

#[test]
fn skill_indices_are_distinct() {
    for (i, skill) in Skill::ALL.iter().enumerate() {
        assert_eq!(skill.index(), i);
        assert!(!skill.label().is_empty());
        assert!(!skill.key_hint().is_empty());
    }
}
