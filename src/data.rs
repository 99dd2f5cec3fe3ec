use crate::config::asset;

/// One showcased project. Titles double as list keys, so they must be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image_url: &'static str,
    pub project_url: &'static str,
}

impl ProjectRecord {
    /// Tag badges in input order, each with its list key.
    pub fn tag_badges(&self) -> impl Iterator<Item = (String, &'static str)> + '_ {
        self.tags
            .iter()
            .enumerate()
            .map(move |(i, tag)| (format!("{}-tags-{}", self.title, i), *tag))
    }
}

pub static PROJECTS_DATA: [ProjectRecord; 4] = [
    ProjectRecord {
        title: "Abajora Podcast Commercial",
        description: "Crafted a captivating commercial for the 'Abajora' podcast, utilizing cutting-edge 3D modeling, dynamic motion graphics, and expert video editing. This project showcases our ability to blend realism with creativity, bringing the podcast's essence to life.",
        tags: &["3D", "Blender", "AfterEffects", "Premiere"],
        image_url: asset!("/images/abajora.svg"),
        project_url: "#",
    },
    ProjectRecord {
        title: "Vivi Water Company Ad Campaign",
        description: "Executed a compelling ad campaign for Vivi Water Company, featuring meticulously realistic product modeling and stunning renders. Our team leveraged advanced tools to create visually striking content that effectively promoted Vivi's brand.",
        tags: &["Blender", "AfterEffects", "Photoshop", "Illustrator"],
        image_url: asset!("/images/vivi.svg"),
        project_url: "#",
    },
    ProjectRecord {
        title: "ARKI Tectonica Celebration Ceremony",
        description: "Documented a prestigious celebration ceremony for ARKI Tectonica with cinematic precision. Utilizing our high-end cinematic kit, we captured and edited breathtaking visuals that highlighted the event's grandeur and significance.",
        tags: &["DaVinciResolve", "AfterEffects", "Premiere", "Photoshop", "Videography", "Photography"],
        image_url: asset!("/images/arki.svg"),
        project_url: "#",
    },
    ProjectRecord {
        title: "Tiraz Company Brochure Design",
        description: "Designed a visually appealing brochure for Tiraz Company, from content writing to photo editing and layout design. This project exemplifies our comprehensive approach to creating engaging marketing materials.",
        tags: &["InDesign", "Photoshop", "Writing", "Illustrator"],
        image_url: asset!("/images/tiraz.svg"),
        project_url: "#",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn titles_are_unique() {
        let titles: HashSet<_> = PROJECTS_DATA.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), PROJECTS_DATA.len());
    }

    #[test]
    fn tag_badges_follow_input_tags_exactly() {
        for project in &PROJECTS_DATA {
            let badges: Vec<_> = project.tag_badges().collect();
            assert_eq!(badges.len(), project.tags.len());
            let labels: Vec<_> = badges.iter().map(|(_, tag)| *tag).collect();
            assert_eq!(labels, project.tags);
        }
    }

    #[test]
    fn repeated_tags_are_kept_with_distinct_keys() {
        let record = ProjectRecord {
            title: "Loop",
            description: "",
            tags: &["2D", "2D", "Blender"],
            image_url: "/images/abajora.svg",
            project_url: "#",
        };
        let badges: Vec<_> = record.tag_badges().collect();
        assert_eq!(
            badges,
            vec![
                ("Loop-tags-0".to_string(), "2D"),
                ("Loop-tags-1".to_string(), "2D"),
                ("Loop-tags-2".to_string(), "Blender"),
            ]
        );
    }

    #[test]
    fn empty_tag_list_renders_no_badges() {
        let record = ProjectRecord { tags: &[], ..PROJECTS_DATA[0] };
        assert_eq!(record.tag_badges().count(), 0);
    }
}
