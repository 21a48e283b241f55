use crate::format;
use crate::models::{
    CastCredit, CreditLink, DidYouKnow, MovieDetail, PersonLink, Photo, RelatedMovie,
    TechnicalSpecs, UpcomingMovieCard, VideoClip,
};
use crate::tmdb::{CastMember, MovieDetails, MovieSummary, Video, IMAGE_BASE};

const TOP_CAST_LIMIT: usize = 10;
const VIDEO_LIMIT: usize = 5;
const PHOTO_LIMIT: usize = 4;
const RELATED_LIMIT: usize = 4;
const NOT_AVAILABLE: &str = "N/A";

fn image_url(size: &str, path: &str) -> String {
    format!("{IMAGE_BASE}/{size}{path}")
}

fn profile_href(name: &str) -> String {
    format!("/cast/{}", urlencoding::encode(name))
}

fn is_youtube(video: &Video) -> bool {
    video.site.as_deref() == Some("YouTube")
}

/// Cards without a poster are dropped; order is preserved.
pub fn upcoming_cards(results: Vec<MovieSummary>) -> Vec<UpcomingMovieCard> {
    results.into_iter().filter_map(upcoming_card).collect()
}

pub fn upcoming_card(movie: MovieSummary) -> Option<UpcomingMovieCard> {
    let poster = movie.poster_path.as_deref().filter(|p| !p.is_empty())?;
    Some(UpcomingMovieCard {
        id: movie.id,
        title: movie.title.clone().unwrap_or_default(),
        poster_url: image_url("w500", poster),
        release_date: format::long_date(movie.release_date.as_deref())
            .unwrap_or_else(|| "TBA".to_string()),
        overview: movie.overview.unwrap_or_default(),
    })
}

/// `None` when the record has no usable title.
pub fn movie_detail(details: MovieDetails) -> Option<MovieDetail> {
    let title = details
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())?
        .to_string();
    let credits = &details.credits;
    let videos = &details.videos.results;

    let director = credits
        .crew
        .iter()
        .find(|c| c.job.as_deref() == Some("Director"))
        .map(|c| PersonLink {
            name: c.name.clone(),
            href: profile_href(&c.name),
        });
    let writers = credits
        .crew
        .iter()
        .filter(|c| c.department.as_deref() == Some("Writing"))
        .map(|c| CreditLink {
            name: c.name.clone(),
            role: c.job.clone().unwrap_or_default(),
            href: profile_href(&c.name),
        })
        .collect();
    let top_cast = credits
        .cast
        .iter()
        .take(TOP_CAST_LIMIT)
        .map(cast_credit)
        .collect();

    let trailer_url = videos
        .iter()
        .find(|v| is_youtube(v) && v.video_type.as_deref() == Some("Trailer"))
        .map(|v| youtube_embed(&v.key));
    let clips = videos
        .iter()
        .filter(|v| is_youtube(v))
        .take(VIDEO_LIMIT)
        .map(video_clip)
        .collect();

    let photos = details
        .images
        .as_ref()
        .map(|images| {
            images
                .backdrops
                .iter()
                .take(PHOTO_LIMIT)
                .map(|p| Photo {
                    url: image_url("w500", &p.file_path),
                    hint: "movie still".to_string(),
                })
                .collect()
        })
        .unwrap_or_default();
    let related_movies = details
        .similar
        .map(|page| {
            page.results
                .into_iter()
                .take(RELATED_LIMIT)
                .map(related_movie)
                .collect()
        })
        .unwrap_or_default();
    let plot_keywords = details
        .keywords
        .map(|k| k.keywords.into_iter().map(|k| k.name).collect())
        .unwrap_or_default();

    let vote_average = details.vote_average.unwrap_or_default();
    let runtime_label = details.runtime.map(|m| format!("{m} min"));

    Some(MovieDetail {
        id: details.id,
        poster_url: details
            .poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| image_url("w500", p)),
        poster_hint: format!("{title} movie poster"),
        release_year: format::release_year(details.release_date.as_deref())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        rating: "PG-13".to_string(),
        duration: details
            .runtime
            .map(format::runtime)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        genres: details.genres.into_iter().map(|g| g.name).collect(),
        release_date: format::long_date(details.release_date.as_deref()),
        imdb_rating: format::one_decimal(vote_average),
        imdb_votes: format::group_thousands(details.vote_count.unwrap_or_default()),
        storyline: details.overview.unwrap_or_default(),
        director,
        writers,
        top_cast,
        trailer_url,
        videos: clips,
        photos,
        related_movies,
        metascore: format::metascore(vote_average),
        awards_summary: NOT_AVAILABLE.to_string(),
        plot_keywords,
        tagline: details.tagline.filter(|t| !t.trim().is_empty()),
        did_you_know: DidYouKnow::default(),
        technical_specs: TechnicalSpecs {
            runtime: runtime_label.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            sound_mix: NOT_AVAILABLE.to_string(),
            aspect_ratio: NOT_AVAILABLE.to_string(),
        },
        title,
    })
}

fn cast_credit(member: &CastMember) -> CastCredit {
    let avatar = match member.profile_path.as_deref().filter(|p| !p.is_empty()) {
        Some(path) => image_url("w200", path),
        None => format!(
            "https://picsum.photos/seed/{}/100/100",
            urlencoding::encode(&member.name)
        ),
    };
    CastCredit {
        name: member.name.clone(),
        role: member.character.clone().unwrap_or_default(),
        avatar,
        href: profile_href(&member.name),
    }
}

fn youtube_embed(key: &str) -> String {
    format!("https://www.youtube.com/embed/{key}")
}

fn video_clip(video: &Video) -> VideoClip {
    VideoClip {
        label: video.name.clone().unwrap_or_default(),
        thumbnail_url: format!("https://img.youtube.com/vi/{}/0.jpg", video.key),
        video_url: youtube_embed(&video.key),
        hint: format!("movie {}", video.video_type.as_deref().unwrap_or("video")),
        duration: NOT_AVAILABLE.to_string(),
    }
}

fn related_movie(movie: MovieSummary) -> RelatedMovie {
    RelatedMovie {
        id: movie.id,
        title: movie.title.unwrap_or_default(),
        poster_url: movie
            .poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| image_url("w400", p)),
        year: format::release_year(movie.release_date.as_deref()),
        rating: movie.vote_average.map(format::one_decimal),
        likes: format::group_thousands(movie.vote_count.unwrap_or_default()),
        description: movie.overview.unwrap_or_default(),
    }
}
