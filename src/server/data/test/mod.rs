mod category;
mod enrollment;
mod lesson_completion;
mod review;
