//! Bundled default alumni. Seeds a fresh directory and backs the mentor
//! matching fallback when a submitted candidate pool cannot be parsed.

use crate::models::alumni::{placeholder_avatar, AlumniRecord};

struct SeedAlumnus {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    graduation_year: i32,
    current_role: &'static str,
    skills: &'static [&'static str],
    linkedin: &'static str,
    short_bio: &'static str,
}

const SEED: &[SeedAlumnus] = &[
    SeedAlumnus {
        id: "1",
        name: "Aisha Khan",
        email: "aisha.khan@example.com",
        graduation_year: 2012,
        current_role: "Principal Cloud Architect at Nimbus Systems",
        skills: &["AWS", "Serverless", "Terraform", "Kubernetes"],
        linkedin: "https://www.linkedin.com/in/aisha-khan",
        short_bio: "Designs multi-region cloud platforms and mentors new engineers on infrastructure as code.",
    },
    SeedAlumnus {
        id: "2",
        name: "Daniel Okafor",
        email: "daniel.okafor@example.com",
        graduation_year: 2016,
        current_role: "Senior Product Manager at Brightpath",
        skills: &["Product Management", "User Research", "Roadmapping"],
        linkedin: "https://www.linkedin.com/in/daniel-okafor",
        short_bio: "Moved from engineering into product and enjoys helping others make the same switch.",
    },
    SeedAlumnus {
        id: "3",
        name: "Mei Lin",
        email: "mei.lin@example.com",
        graduation_year: 2018,
        current_role: "Machine Learning Engineer at Vectorworks",
        skills: &["Python", "PyTorch", "Machine Learning", "MLOps"],
        linkedin: "https://www.linkedin.com/in/mei-lin",
        short_bio: "Ships recommendation models to production and writes about practical ML.",
    },
    SeedAlumnus {
        id: "4",
        name: "Carlos Mendes",
        email: "carlos.mendes@example.com",
        graduation_year: 2010,
        current_role: "VP of Engineering at Ledgerline",
        skills: &["Engineering Leadership", "Java", "Distributed Systems"],
        linkedin: "https://www.linkedin.com/in/carlos-mendes",
        short_bio: "Has grown engineering teams from five to two hundred people across three startups.",
    },
    SeedAlumnus {
        id: "5",
        name: "Sofia Rossi",
        email: "sofia.rossi@example.com",
        graduation_year: 2019,
        current_role: "Frontend Engineer at Pixelhaus",
        skills: &["React", "TypeScript", "Accessibility", "Design Systems"],
        linkedin: "https://www.linkedin.com/in/sofia-rossi",
        short_bio: "Builds accessible interfaces and runs a weekend workshop for bootcamp graduates.",
    },
    SeedAlumnus {
        id: "6",
        name: "Tom Becker",
        email: "tom.becker@example.com",
        graduation_year: 2014,
        current_role: "Security Engineer at Fortwall",
        skills: &["Application Security", "Penetration Testing", "Rust"],
        linkedin: "https://www.linkedin.com/in/tom-becker",
        short_bio: "Finds bugs before attackers do and teaches secure coding to student clubs.",
    },
    SeedAlumnus {
        id: "7",
        name: "Grace Mensah",
        email: "grace.mensah@example.com",
        graduation_year: 2017,
        current_role: "Data Analyst at Harbor Health",
        skills: &["SQL", "Data Visualization", "Statistics"],
        linkedin: "https://www.linkedin.com/in/grace-mensah",
        short_bio: "Turns hospital operations data into dashboards that clinicians actually use.",
    },
    SeedAlumnus {
        id: "8",
        name: "Ravi Patel",
        email: "ravi.patel@example.com",
        graduation_year: 2013,
        current_role: "Site Reliability Engineer at Streamcast",
        skills: &["Go", "Observability", "Google Cloud", "Incident Response"],
        linkedin: "https://www.linkedin.com/in/ravi-patel",
        short_bio: "Keeps video streaming online for millions of viewers and loves a good postmortem.",
    },
    SeedAlumnus {
        id: "9",
        name: "Hannah Schmidt",
        email: "hannah.schmidt@example.com",
        graduation_year: 2011,
        current_role: "Founder and CEO at Greenroute",
        skills: &["Entrepreneurship", "Fundraising", "Sustainability"],
        linkedin: "https://www.linkedin.com/in/hannah-schmidt",
        short_bio: "Started a logistics company focused on low-emission delivery.",
    },
    SeedAlumnus {
        id: "10",
        name: "Jae-won Choi",
        email: "jaewon.choi@example.com",
        graduation_year: 2020,
        current_role: "Mobile Developer at Tapline",
        skills: &["Swift", "Kotlin", "Mobile Development"],
        linkedin: "https://www.linkedin.com/in/jaewon-choi",
        short_bio: "Builds consumer mobile apps and contributes to open source UI libraries.",
    },
];

/// The bundled default alumni list, in directory order.
pub fn default_alumni() -> Vec<AlumniRecord> {
    SEED.iter()
        .map(|s| AlumniRecord {
            id: s.id.to_string(),
            name: s.name.to_string(),
            email: s.email.to_string(),
            graduation_year: s.graduation_year,
            current_role: s.current_role.to_string(),
            skills: s.skills.iter().map(|k| k.to_string()).collect(),
            linkedin_url: s.linkedin.to_string(),
            short_bio: s.short_bio.to_string(),
            avatar_url: placeholder_avatar(s.id),
            match_score: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_alumni_ids_are_unique() {
        let alumni = default_alumni();
        let ids: HashSet<_> = alumni.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), alumni.len());
    }

    #[test]
    fn test_default_alumni_are_display_ready() {
        for alumnus in default_alumni() {
            assert!(!alumnus.avatar_url.is_empty());
            assert!(!alumnus.skills.is_empty());
            assert!(alumnus.match_score.is_none());
        }
    }
}
