// Trimmed WordPress REST answers

/// `GET /posts?per_page=9&page=1&_embed&_fields=...`
#[cfg(test)]
pub const LIST_JSON: &str = r##"[
  {
    "id": 311,
    "slug": "community-rounds-explained",
    "date_gmt": "2024-03-04T10:15:30",
    "link": "https://launchpad.wordpress.com/2024/03/04/community-rounds-explained/",
    "title": {"rendered": "Community rounds, <em>explained</em>"},
    "excerpt": {"rendered": "<p>Letting customers invest in your company turns them into your loudest advocates. Here is how a community round works, from pitch to close.</p>\n"},
    "_embedded": {
      "author": [{"id": 2, "name": "Launchpad team"}],
      "wp:featuredmedia": [{
        "id": 901,
        "source_url": "https://cdn.launchpad.example/pitch-night.jpg",
        "alt_text": "Founders at a pitch night",
        "media_details": {
          "width": 2400,
          "height": 1600,
          "sizes": {
            "medium": {"source_url": "https://cdn.launchpad.example/pitch-night-300x200.jpg", "width": 300, "height": 200},
            "large": {"source_url": "https://cdn.launchpad.example/pitch-night-1024x683.jpg", "width": 1024, "height": 683},
            "full": {"source_url": "https://cdn.launchpad.example/pitch-night.jpg", "width": 2400, "height": 1600}
          }
        }
      }]
    }
  },
  {
    "id": 305,
    "slug": "five-questions-before-raising",
    "date_gmt": "2024-02-19T08:00:00",
    "link": "https://launchpad.wordpress.com/2024/02/19/five-questions-before-raising/",
    "title": {"rendered": "Five questions before raising"},
    "excerpt": {"rendered": "<p>Short and sweet.</p>\n"}
  },
  {
    "id": 298,
    "slug": "our-first-year",
    "date_gmt": "2023-12-31T23:30:00",
    "link": "https://launchpad.wordpress.com/2023/12/31/our-first-year/",
    "title": {"rendered": "Our first year"},
    "excerpt": {"rendered": "<p>Thank you!</p>\n"},
    "_embedded": {
      "wp:featuredmedia": [{
        "id": 880,
        "source_url": "https://cdn.launchpad.example/cake.png",
        "alt_text": ""
      }]
    }
  }
]"##;

/// `GET /posts?slug=community-rounds-explained&_embed`
#[cfg(test)]
pub const DETAIL_JSON: &str = r##"[
  {
    "id": 311,
    "slug": "community-rounds-explained",
    "date_gmt": "2024-03-04T10:15:30",
    "link": "https://launchpad.wordpress.com/2024/03/04/community-rounds-explained/",
    "title": {"rendered": "Community rounds, <em>explained</em>"},
    "content": {"rendered": "<p>Most founders think of investors as a handful of funds.</p>\n<h2>How it works</h2>\n<p>You set the terms, your community invests.</p>\n"},
    "excerpt": {"rendered": "<p>Letting customers invest in your company turns them into your loudest advocates. Here is how a community round works, from pitch to close.</p>\n"},
    "_embedded": {
      "wp:featuredmedia": [{
        "id": 901,
        "source_url": "https://cdn.launchpad.example/pitch-night.jpg",
        "alt_text": "Founders at a pitch night",
        "media_details": {
          "sizes": {
            "medium": {"source_url": "https://cdn.launchpad.example/pitch-night-300x200.jpg", "width": 300, "height": 200},
            "medium_large": {"source_url": "https://cdn.launchpad.example/pitch-night-768x512.jpg", "width": 768, "height": 512},
            "large": {"source_url": "https://cdn.launchpad.example/pitch-night-1024x683.jpg", "width": 1024, "height": 683},
            "full": {"source_url": "https://cdn.launchpad.example/pitch-night.jpg", "width": 2400, "height": 1600}
          }
        }
      }]
    }
  }
]"##;
